//! Standings rows and form markers.

use serde::{Deserialize, Serialize};

/// Outcome marker appended to a team's form history after each match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMarker {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl FormMarker {
    /// Directional indicator shown in the rendered table.
    pub fn arrow(&self) -> &'static str {
        match self {
            FormMarker::Win => "↑",
            FormMarker::Loss => "↓",
        }
    }
}

/// Per-team accumulator row. Mutated only by applying a match result.
///
/// Invariants maintained by the standings tracker:
/// `matches == wins + losses` and `points == 2 * wins`.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsRow {
    pub team: String,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    #[serde(serialize_with = "crate::serialize_round2")]
    pub nrr: f64,
    pub qualified: bool,
    pub form: Vec<FormMarker>,
}

impl StandingsRow {
    /// A zeroed row for `team`, created at tournament start.
    pub fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            matches: 0,
            wins: 0,
            losses: 0,
            points: 0,
            nrr: 0.0,
            qualified: false,
            form: Vec::new(),
        }
    }

    /// The most recent form marker, if the team has played at all.
    pub fn latest_form(&self) -> Option<FormMarker> {
        self.form.last().copied()
    }

    /// Apply a win: +1 match, +1 win, +2 points, NRR nudged up.
    pub fn record_win(&mut self, nrr_nudge: f64) {
        self.matches += 1;
        self.wins += 1;
        self.points += 2;
        self.nrr += nrr_nudge;
        self.form.push(FormMarker::Win);
    }

    /// Apply a loss: +1 match, +1 loss, NRR nudged down.
    pub fn record_loss(&mut self, nrr_nudge: f64) {
        self.matches += 1;
        self.losses += 1;
        self.nrr -= nrr_nudge;
        self.form.push(FormMarker::Loss);
    }
}
