//! Standings tracking — the points table.

use std::cmp::Ordering;

use crate::engine::resolver::RandomSource;
use crate::models::{Fixture, MatchResult, StandingsRow};
use crate::round2;

/// Lower bound of the per-match NRR adjustment.
pub const NRR_NUDGE_MIN: f64 = 0.01;
/// Upper bound of the per-match NRR adjustment.
pub const NRR_NUDGE_MAX: f64 = 0.10;

/// The points table: one row per team, all zeroed at tournament start.
///
/// Rows are owned exclusively by this tracker and mutated only through
/// [`StandingsTable::apply_result`]. At-most-once application per fixture is
/// the caller's responsibility.
#[derive(Debug, Clone)]
pub struct StandingsTable {
    rows: Vec<StandingsRow>,
}

impl StandingsTable {
    pub fn new(teams: &[String]) -> Self {
        Self {
            rows: teams.iter().map(|t| StandingsRow::new(t)).collect(),
        }
    }

    /// Rows in their stable (creation) order.
    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    /// Apply a completed fixture: both teams +1 match; the winner gains a
    /// win, 2 points and a random NRR boost; the loser takes an independent
    /// NRR cut. Each side's nudge is a two-decimal uniform draw from
    /// `[NRR_NUDGE_MIN, NRR_NUDGE_MAX)`.
    pub fn apply_result(
        &mut self,
        fixture: &Fixture,
        winner: &str,
        rng: &mut dyn RandomSource,
    ) -> MatchResult {
        let result = MatchResult::new(fixture, winner);

        let win_nudge = round2(rng.next_range(NRR_NUDGE_MIN, NRR_NUDGE_MAX));
        let loss_nudge = round2(rng.next_range(NRR_NUDGE_MIN, NRR_NUDGE_MAX));

        if let Some(row) = self.row_mut(&result.winner) {
            row.record_win(win_nudge);
        }
        if let Some(row) = self.row_mut(&result.loser) {
            row.record_loss(loss_nudge);
        }

        tracing::debug!(
            match_no = result.match_no,
            winner = %result.winner,
            "Applied match result"
        );
        result
    }

    /// Rows ranked descending by (points, NRR); ties beyond that keep the
    /// stable creation order.
    pub fn ranked(&self) -> Vec<StandingsRow> {
        let mut ranked = self.rows.clone();
        ranked.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.nrr.partial_cmp(&a.nrr).unwrap_or(Ordering::Equal))
        });
        ranked
    }

    /// Reset-then-set qualification for the current top 4 by the ranking
    /// rule. Idempotent; safe to recompute at every render.
    pub fn mark_qualified(&mut self) {
        let top: Vec<String> = self
            .ranked()
            .into_iter()
            .take(4)
            .map(|row| row.team)
            .collect();

        for row in &mut self.rows {
            row.qualified = top.contains(&row.team);
        }
    }

    /// The current top 4 team names by the ranking rule.
    pub fn top_four(&self) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(4)
            .map(|row| row.team)
            .collect()
    }

    fn row_mut(&mut self, team: &str) -> Option<&mut StandingsRow> {
        self.rows.iter_mut().find(|row| row.team == team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::resolver::ScriptedSource;
    use crate::models::FormMarker;

    fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fixture(number: u32, home: &str, away: &str) -> Fixture {
        Fixture {
            number,
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    fn assert_invariants(table: &StandingsTable) {
        for row in table.rows() {
            assert_eq!(row.matches, row.wins + row.losses, "team {}", row.team);
            assert_eq!(row.points, 2 * row.wins, "team {}", row.team);
        }
    }

    #[test]
    fn test_apply_result_updates_both_teams() {
        let mut table = StandingsTable::new(&teams(&["A", "B"]));
        let mut rng = ScriptedSource::constant(0.5);

        let result = table.apply_result(&fixture(1, "A", "B"), "A", &mut rng);
        assert_eq!(result.winner, "A");
        assert_eq!(result.loser, "B");

        let rows = table.rows();
        assert_eq!(rows[0].wins, 1);
        assert_eq!(rows[0].points, 2);
        assert!(rows[0].nrr > 0.0);
        assert_eq!(rows[0].latest_form(), Some(FormMarker::Win));
        assert_eq!(rows[1].losses, 1);
        assert_eq!(rows[1].points, 0);
        assert!(rows[1].nrr < 0.0);
        assert_eq!(rows[1].latest_form(), Some(FormMarker::Loss));
        assert_invariants(&table);
    }

    #[test]
    fn test_nrr_nudges_two_decimal_in_range() {
        let mut table = StandingsTable::new(&teams(&["A", "B"]));
        let mut rng = crate::engine::SeededSource::new(11);

        for number in 1..=20 {
            table.apply_result(&fixture(number, "A", "B"), "A", &mut rng);
        }
        let winner_nrr = table.rows()[0].nrr;
        // 20 nudges of at most 0.10 each, at least 0.01 each.
        assert!(winner_nrr >= 20.0 * NRR_NUDGE_MIN - 1e-9);
        assert!(winner_nrr <= 20.0 * NRR_NUDGE_MAX + 1e-9);
        // Sum of two-decimal values stays two-decimal.
        assert!((winner_nrr * 100.0 - (winner_nrr * 100.0).round()).abs() < 1e-6);
    }

    #[test]
    fn test_invariants_hold_after_every_result() {
        let names = teams(&["A", "B", "C", "D"]);
        let fixtures = crate::engine::generate_fixtures(&names);
        let mut table = StandingsTable::new(&names);
        let mut rng = ScriptedSource::new(vec![0.4, 0.7, 0.2]);

        for fx in &fixtures {
            table.apply_result(fx, &fx.home, &mut rng);
            assert_invariants(&table);
        }

        let total_wins: u32 = table.rows().iter().map(|r| r.wins).sum();
        let total_losses: u32 = table.rows().iter().map(|r| r.losses).sum();
        assert_eq!(total_wins as usize, fixtures.len());
        assert_eq!(total_losses as usize, fixtures.len());
    }

    #[test]
    fn test_ranking_by_points_then_nrr() {
        let mut table = StandingsTable::new(&teams(&["A", "B", "C"]));
        let mut rng = ScriptedSource::constant(0.5);

        // A beats B twice; C beats B once. A: 4 pts, C: 2 pts, B: 0 pts.
        table.apply_result(&fixture(1, "A", "B"), "A", &mut rng);
        table.apply_result(&fixture(2, "A", "B"), "A", &mut rng);
        table.apply_result(&fixture(3, "C", "B"), "C", &mut rng);

        let ranked = table.ranked();
        assert_eq!(ranked[0].team, "A");
        assert_eq!(ranked[1].team, "C");
        assert_eq!(ranked[2].team, "B");
    }

    #[test]
    fn test_nrr_breaks_point_ties() {
        let mut table = StandingsTable::new(&teams(&["A", "B", "C", "D"]));
        // First result draws a big nudge pair, second a small one.
        let mut rng = ScriptedSource::new(vec![0.99, 0.99, 0.0, 0.0]);

        table.apply_result(&fixture(1, "A", "B"), "A", &mut rng);
        table.apply_result(&fixture(2, "C", "D"), "C", &mut rng);

        let ranked = table.ranked();
        assert_eq!(ranked[0].points, ranked[1].points);
        assert_eq!(ranked[0].team, "A"); // bigger NRR boost
        assert_eq!(ranked[1].team, "C");
    }

    #[test]
    fn test_mark_qualified_reset_then_set() {
        let names = teams(&["A", "B", "C", "D", "E"]);
        let mut table = StandingsTable::new(&names);
        let mut rng = ScriptedSource::constant(0.5);

        // A, B, C, D each win once against E.
        for (number, winner) in ["A", "B", "C", "D"].iter().enumerate() {
            table.apply_result(&fixture(number as u32 + 1, winner, "E"), winner, &mut rng);
        }
        table.mark_qualified();
        let qualified: Vec<&str> = table
            .rows()
            .iter()
            .filter(|r| r.qualified)
            .map(|r| r.team.as_str())
            .collect();
        assert_eq!(qualified, vec!["A", "B", "C", "D"]);

        // E overtakes D on points; recomputing flips the flags.
        table.apply_result(&fixture(5, "E", "D"), "E", &mut rng);
        table.apply_result(&fixture(6, "E", "D"), "E", &mut rng);
        table.mark_qualified();

        let e_row = table.rows().iter().find(|r| r.team == "E").unwrap();
        let d_row = table.rows().iter().find(|r| r.team == "D").unwrap();
        assert!(e_row.qualified);
        assert!(!d_row.qualified);
        assert_eq!(table.rows().iter().filter(|r| r.qualified).count(), 4);
    }

    #[test]
    fn test_mark_qualified_idempotent() {
        let mut table = StandingsTable::new(&teams(&["A", "B", "C", "D", "E"]));
        let mut rng = ScriptedSource::constant(0.5);
        table.apply_result(&fixture(1, "A", "B"), "A", &mut rng);

        table.mark_qualified();
        let first: Vec<bool> = table.rows().iter().map(|r| r.qualified).collect();
        table.mark_qualified();
        let second: Vec<bool> = table.rows().iter().map(|r| r.qualified).collect();
        assert_eq!(first, second);
    }
}
