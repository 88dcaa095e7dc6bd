//! Fixtures, schedule entries and the match result log.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::MatchId;

/// An ordered pairing in the league sequence. Identity is the position
/// (`number`, 1-based) in the generated fixture list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub number: u32,
    pub home: String,
    pub away: String,
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// Broadcast slot, alternating by fixture-index parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Evening,
    Afternoon,
}

impl Slot {
    /// Slot for the fixture at `index` (0-based): even indices get the
    /// evening slot, odd indices the afternoon slot.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Slot::Evening
        } else {
            Slot::Afternoon
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Evening => "02:00 PM GMT / 07:30 PM LOCAL",
            Slot::Afternoon => "10:00 AM GMT / 03:30 PM LOCAL",
        }
    }
}

/// A fixture with its assigned calendar date and slot. One match per day,
/// no rest days, no team-conflict checking.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledFixture {
    pub fixture: Fixture,
    pub date: NaiveDate,
    pub slot: Slot,
}

/// A completed match. Created exactly once per fixture and appended to the
/// result log; never mutated or removed.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub id: MatchId,
    pub match_no: u32,
    pub home: String,
    pub away: String,
    pub winner: String,
    pub loser: String,
    pub played_at: DateTime<Utc>,
}

impl MatchResult {
    /// Record an outcome for `fixture`; the loser is the other team.
    pub fn new(fixture: &Fixture, winner: &str) -> Self {
        let loser = if winner == fixture.home {
            fixture.away.clone()
        } else {
            fixture.home.clone()
        };
        Self {
            id: MatchId::generate(fixture.number, &fixture.home, &fixture.away),
            match_no: fixture.number,
            home: fixture.home.clone(),
            away: fixture.away.clone(),
            winner: winner.to_string(),
            loser,
            played_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Fixture {
        Fixture {
            number: 3,
            home: "Chennai".to_string(),
            away: "Mumbai".to_string(),
        }
    }

    #[test]
    fn test_fixture_display() {
        assert_eq!(fixture().to_string(), "Chennai vs Mumbai");
    }

    #[test]
    fn test_slot_alternation() {
        assert_eq!(Slot::for_index(0), Slot::Evening);
        assert_eq!(Slot::for_index(1), Slot::Afternoon);
        assert_eq!(Slot::for_index(2), Slot::Evening);
    }

    #[test]
    fn test_result_derives_loser_from_home_win() {
        let result = MatchResult::new(&fixture(), "Chennai");
        assert_eq!(result.winner, "Chennai");
        assert_eq!(result.loser, "Mumbai");
    }

    #[test]
    fn test_result_derives_loser_from_away_win() {
        let result = MatchResult::new(&fixture(), "Mumbai");
        assert_eq!(result.winner, "Mumbai");
        assert_eq!(result.loser, "Chennai");
    }

    #[test]
    fn test_result_id_tracks_fixture() {
        let result = MatchResult::new(&fixture(), "Chennai");
        assert_eq!(result.id, MatchId::generate(3, "Chennai", "Mumbai"));
        assert_eq!(result.match_no, 3);
    }
}
