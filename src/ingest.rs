//! Roster ingestion.
//!
//! Parses the uploaded squad CSV (columns: Name, Team, Nationality, Role,
//! Rating) into typed [`Player`] records. Everything downstream of this
//! boundary assumes a well-typed roster.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::models::Player;

/// Roster loading errors.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster row: {0}")]
    Parse(#[from] csv::Error),

    #[error("roster contains no players")]
    Empty,
}

/// Parse a roster from any CSV reader (file contents, upload body).
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<Player>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut players = Vec::new();
    for record in csv_reader.deserialize() {
        let player: Player = record?;
        players.push(player);
    }

    if players.is_empty() {
        return Err(IngestError::Empty);
    }

    tracing::debug!("Parsed roster with {} players", players.len());
    Ok(players)
}

/// Load a roster CSV from disk.
pub fn read_roster(path: &Path) -> Result<Vec<Player>, IngestError> {
    let contents = std::fs::read_to_string(path)?;
    parse_roster(contents.as_bytes())
}
