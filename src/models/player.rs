//! Player model — roster rows as uploaded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nationality counted as domestic; every other value is a foreign player.
pub const HOME_NATIONALITY: &str = "Indian";

/// Squad role of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batter,
    Wicketkeeper,
    Allrounder,
    Bowler,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batter => "Batter",
            Role::Wicketkeeper => "Wicketkeeper",
            Role::Allrounder => "Allrounder",
            Role::Bowler => "Bowler",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Batter" => Ok(Role::Batter),
            "Wicketkeeper" => Ok(Role::Wicketkeeper),
            "Allrounder" => Ok(Role::Allrounder),
            "Bowler" => Ok(Role::Bowler),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// A single roster row. Immutable once loaded.
///
/// Field names map to the CSV headers of the uploaded squad file
/// (Name, Team, Nationality, Role, Rating).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    pub name: String,

    /// Team identifier this player belongs to.
    pub team: String,

    /// "Indian" or a foreign nationality.
    pub nationality: String,

    pub role: Role,

    /// Player skill rating; team strength is the squad average.
    pub rating: f64,
}

impl Player {
    /// Whether this player counts against the foreign-player limit.
    pub fn is_foreign(&self) -> bool {
        self.nationality != HOME_NATIONALITY
    }
}
