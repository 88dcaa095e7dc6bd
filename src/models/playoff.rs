//! Playoff bracket stages and phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed stages of the playoff bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffStage {
    Qualifier1,
    Eliminator,
    Qualifier2,
    Final,
}

impl PlayoffStage {
    pub fn label(&self) -> &'static str {
        match self {
            PlayoffStage::Qualifier1 => "Qualifier 1",
            PlayoffStage::Eliminator => "Eliminator",
            PlayoffStage::Qualifier2 => "Qualifier 2",
            PlayoffStage::Final => "Final",
        }
    }
}

impl fmt::Display for PlayoffStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current phase of the bracket. One trigger advances one phase; `Complete`
/// is terminal and further triggers are no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffPhase {
    #[default]
    AwaitingQualifier1,
    AwaitingEliminator,
    AwaitingQualifier2,
    AwaitingFinal,
    Complete,
}

/// Outcome of one bracket stage. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageResult {
    pub stage: PlayoffStage,
    pub home: String,
    pub away: String,
    pub winner: String,
    pub loser: String,
}

impl StageResult {
    pub fn new(stage: PlayoffStage, home: String, away: String, winner: String) -> Self {
        let loser = if winner == home {
            away.clone()
        } else {
            home.clone()
        };
        Self {
            stage,
            home,
            away,
            winner,
            loser,
        }
    }
}

/// Final tournament placings, derived once the bracket completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalPlacings {
    pub first: String,
    pub second: String,
    pub third: String,
}
