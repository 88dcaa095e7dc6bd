//! Deterministic ID generation using SHA256 hashing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A deterministic match-record ID derived from a content hash.
///
/// Hashes the match number and the two team names, so replaying the same
/// fixture sequence yields the same IDs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(String);

impl MatchId {
    /// Generate a MatchId from the match number and participants.
    /// Uses SHA256 and keeps the first 16 hex characters.
    pub fn generate(match_no: u32, home: &str, away: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(match_no.to_string().as_bytes());
        hasher.update(b"|");
        hasher.update(home.as_bytes());
        hasher.update(b"|");
        hasher.update(away.as_bytes());
        let hash = hex::encode(hasher.finalize());
        Self(hash[..16].to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchId({})", self.0)
    }
}
