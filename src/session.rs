//! The tournament session.
//!
//! One session owns all mutable tournament state: balance report, fixtures,
//! schedule, result log, standings and playoff bracket. It is created when a
//! roster is uploaded and discarded at session end. The session is the
//! calling collaborator that guards engine preconditions (fixtures left,
//! league complete), so the engine itself never re-validates them.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::engine::{
    build_balance_report, build_schedule, generate_fixtures, resolve, PlayoffBracket,
    RandomSource, StandingsTable, TeamStrength,
};
use crate::models::{
    Fixture, MatchResult, Player, ScheduledFixture, StageResult, StandingsRow, TeamBalance,
};

/// Precondition violations at the session surface.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("league phase already complete: all {0} fixtures have results")]
    LeagueComplete(usize),

    #[error("league phase incomplete: {remaining} of {total} fixtures unplayed")]
    LeagueIncomplete { remaining: usize, total: usize },

    #[error("tournament needs at least {needed} teams, roster has {found}")]
    NotEnoughTeams { needed: usize, found: usize },
}

/// A single tournament under single-actor control.
///
/// Every mutating operation is a synchronous read-compute-replace step; the
/// caller must hold exclusive access for the whole step (the API wraps the
/// session in a write lock), which makes at-most-once application of each
/// fixture the session's guarantee rather than the engine's.
pub struct TournamentSession {
    id: Uuid,
    balance_report: Vec<TeamBalance>,
    strengths: HashMap<String, TeamStrength>,
    fixtures: Vec<Fixture>,
    schedule: Vec<ScheduledFixture>,
    results: Vec<MatchResult>,
    standings: StandingsTable,
    playoffs: Option<PlayoffBracket>,
    rng: Box<dyn RandomSource>,
}

impl TournamentSession {
    /// Validate the roster and build the full fixture list and schedule.
    /// Needs at least two teams for a league; the playoff bracket later
    /// requires four.
    pub fn new(
        roster: &[Player],
        start_date: NaiveDate,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, SessionError> {
        let balance_report = build_balance_report(roster);
        if balance_report.len() < 2 {
            return Err(SessionError::NotEnoughTeams {
                needed: 2,
                found: balance_report.len(),
            });
        }

        let teams: Vec<String> = balance_report.iter().map(|b| b.team.clone()).collect();
        let strengths = balance_report
            .iter()
            .map(|b| {
                (
                    b.team.clone(),
                    TeamStrength {
                        rating: b.average_rating,
                        balanced: b.balanced,
                    },
                )
            })
            .collect();

        let fixtures = generate_fixtures(&teams);
        let schedule = build_schedule(&fixtures, start_date);
        let standings = StandingsTable::new(&teams);

        let session = Self {
            id: Uuid::new_v4(),
            balance_report,
            strengths,
            fixtures,
            schedule,
            results: Vec::new(),
            standings,
            playoffs: None,
            rng,
        };
        tracing::info!(
            session = %session.id,
            teams = teams.len(),
            fixtures = session.fixtures.len(),
            "Tournament session created"
        );
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn balance_report(&self) -> &[TeamBalance] {
        &self.balance_report
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn schedule(&self) -> &[ScheduledFixture] {
        &self.schedule
    }

    /// The ordered, append-only match result log.
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// The next unplayed fixture, if the league phase is still running.
    pub fn next_fixture(&self) -> Option<&Fixture> {
        self.fixtures.get(self.results.len())
    }

    pub fn league_complete(&self) -> bool {
        self.results.len() == self.fixtures.len()
    }

    /// Resolve and apply exactly one fixture (the next in sequence).
    pub fn play_next_match(&mut self) -> Result<MatchResult, SessionError> {
        let fixture = self
            .next_fixture()
            .cloned()
            .ok_or(SessionError::LeagueComplete(self.fixtures.len()))?;

        let winner = resolve(
            &fixture.home,
            &fixture.away,
            &self.strengths,
            self.rng.as_mut(),
        );
        let result = self
            .standings
            .apply_result(&fixture, &winner, self.rng.as_mut());
        self.results.push(result.clone());
        Ok(result)
    }

    /// Ranked standings for rendering. Once the league is complete the top 4
    /// are (re)marked qualified, idempotently, before ranking.
    pub fn standings(&mut self) -> Vec<StandingsRow> {
        if self.league_complete() {
            self.standings.mark_qualified();
        }
        self.standings.ranked()
    }

    pub fn playoffs(&self) -> Option<&PlayoffBracket> {
        self.playoffs.as_ref()
    }

    /// Advance the playoff bracket by one stage. Seeds the bracket from the
    /// final top 4 on first use; rejects the trigger while league fixtures
    /// remain; returns `Ok(None)` once the bracket is complete.
    pub fn advance_playoffs(&mut self) -> Result<Option<StageResult>, SessionError> {
        if !self.league_complete() {
            return Err(SessionError::LeagueIncomplete {
                remaining: self.fixtures.len() - self.results.len(),
                total: self.fixtures.len(),
            });
        }

        if self.playoffs.is_none() {
            self.standings.mark_qualified();
            let top = self.standings.top_four();
            let seeds: [String; 4] = match <[String; 4]>::try_from(top) {
                Ok(seeds) => seeds,
                Err(top) => {
                    return Err(SessionError::NotEnoughTeams {
                        needed: 4,
                        found: top.len(),
                    })
                }
            };
            tracing::info!(?seeds, "Playoff bracket seeded");
            self.playoffs = Some(PlayoffBracket::new(seeds));
        }

        let bracket = match self.playoffs.as_mut() {
            Some(bracket) => bracket,
            None => return Ok(None),
        };
        Ok(bracket.advance(&self.strengths, self.rng.as_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::resolver::ScriptedSource;
    use crate::models::Role;

    fn squad(team: &str, base_rating: f64) -> Vec<Player> {
        let mut roles = Vec::new();
        roles.extend(std::iter::repeat(Role::Batter).take(4));
        roles.push(Role::Wicketkeeper);
        roles.extend(std::iter::repeat(Role::Allrounder).take(2));
        roles.extend(std::iter::repeat(Role::Bowler).take(4));

        roles
            .into_iter()
            .enumerate()
            .map(|(i, role)| Player {
                name: format!("{} player {}", team, i),
                team: team.to_string(),
                nationality: "Indian".to_string(),
                role,
                rating: base_rating,
            })
            .collect()
    }

    /// Four balanced teams with strictly descending ratings A > B > C > D.
    fn roster() -> Vec<Player> {
        let mut roster = Vec::new();
        for (team, rating) in [("A", 90.0), ("B", 85.0), ("C", 80.0), ("D", 75.0)] {
            roster.extend(squad(team, rating));
        }
        roster
    }

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 22).unwrap()
    }

    fn session_with_constant_draw(draw: f64) -> TournamentSession {
        TournamentSession::new(
            &roster(),
            start_date(),
            Box::new(ScriptedSource::constant(draw)),
        )
        .unwrap()
    }

    #[test]
    fn test_new_builds_fixtures_and_schedule() {
        let session = session_with_constant_draw(0.9);
        assert_eq!(session.fixtures().len(), 12); // 4 * 3
        assert_eq!(session.schedule().len(), 12);
        assert_eq!(session.schedule()[0].date, start_date());
        assert_eq!(session.next_fixture().map(|f| f.number), Some(1));
        assert!(!session.league_complete());
    }

    #[test]
    fn test_rejects_single_team_roster() {
        let result = TournamentSession::new(
            &squad("A", 90.0),
            start_date(),
            Box::new(ScriptedSource::constant(0.5)),
        );
        assert!(matches!(
            result,
            Err(SessionError::NotEnoughTeams { needed: 2, found: 1 })
        ));
    }

    #[test]
    fn test_play_all_fixtures_then_reject() {
        let mut session = session_with_constant_draw(0.9);

        for _ in 0..12 {
            session.play_next_match().unwrap();
        }
        assert!(session.league_complete());
        assert_eq!(session.results().len(), 12);
        assert!(session.next_fixture().is_none());

        assert!(matches!(
            session.play_next_match(),
            Err(SessionError::LeagueComplete(12))
        ));
        // The log is untouched by the rejected trigger.
        assert_eq!(session.results().len(), 12);
    }

    #[test]
    fn test_results_follow_fixture_order() {
        let mut session = session_with_constant_draw(0.9);
        session.play_next_match().unwrap();
        session.play_next_match().unwrap();

        assert_eq!(session.results()[0].match_no, 1);
        assert_eq!(session.results()[1].match_no, 2);
        assert_eq!(session.next_fixture().map(|f| f.number), Some(3));
    }

    #[test]
    fn test_standings_qualification_only_after_completion() {
        let mut session = session_with_constant_draw(0.9);
        session.play_next_match().unwrap();
        assert!(session.standings().iter().all(|row| !row.qualified));

        for _ in 1..12 {
            session.play_next_match().unwrap();
        }
        let qualified = session
            .standings()
            .iter()
            .filter(|row| row.qualified)
            .count();
        assert_eq!(qualified, 4);
    }

    #[test]
    fn test_advance_playoffs_rejected_before_completion() {
        let mut session = session_with_constant_draw(0.9);
        session.play_next_match().unwrap();

        assert!(matches!(
            session.advance_playoffs(),
            Err(SessionError::LeagueIncomplete {
                remaining: 11,
                total: 12
            })
        ));
        assert!(session.playoffs().is_none());
    }

    #[test]
    fn test_full_tournament_with_favorites_winning() {
        // Every draw is 0.9: the favorite always wins, so the league ranking
        // is rating order A, B, C, D and the bracket plays out exactly as
        // the worked example: Q1(A,B)->A, Elim(C,D)->C, Q2(B,C)->B,
        // Final(A,B)->A.
        let mut session = session_with_constant_draw(0.9);
        while !session.league_complete() {
            session.play_next_match().unwrap();
        }

        let standings = session.standings();
        let order: Vec<&str> = standings.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);

        let q1 = session.advance_playoffs().unwrap().unwrap();
        assert_eq!((q1.home.as_str(), q1.away.as_str(), q1.winner.as_str()), ("A", "B", "A"));
        let eliminator = session.advance_playoffs().unwrap().unwrap();
        assert_eq!(
            (eliminator.home.as_str(), eliminator.away.as_str(), eliminator.winner.as_str()),
            ("C", "D", "C")
        );
        let q2 = session.advance_playoffs().unwrap().unwrap();
        assert_eq!((q2.home.as_str(), q2.away.as_str(), q2.winner.as_str()), ("B", "C", "B"));
        let final_result = session.advance_playoffs().unwrap().unwrap();
        assert_eq!(final_result.winner, "A");

        let bracket = session.playoffs().unwrap();
        let placings = bracket.placings().unwrap();
        assert_eq!(
            (placings.first.as_str(), placings.second.as_str(), placings.third.as_str()),
            ("A", "B", "C")
        );

        // Terminal: further triggers are no-ops, not errors.
        assert!(session.advance_playoffs().unwrap().is_none());
        assert!(session.advance_playoffs().unwrap().is_none());
    }

    #[test]
    fn test_wins_and_losses_sum_to_fixture_count() {
        let mut session = session_with_constant_draw(0.4);
        while !session.league_complete() {
            session.play_next_match().unwrap();
        }

        let standings = session.standings();
        let wins: u32 = standings.iter().map(|r| r.wins).sum();
        let losses: u32 = standings.iter().map(|r| r.losses).sum();
        assert_eq!(wins, 12);
        assert_eq!(losses, 12);
        for row in &standings {
            assert_eq!(row.matches, row.wins + row.losses);
            assert_eq!(row.points, 2 * row.wins);
        }
    }
}
