//! Fixture generation and calendar scheduling.

use chrono::{Duration, NaiveDate};

use crate::models::{Fixture, ScheduledFixture, Slot};

/// Generate the double round-robin fixture list.
///
/// Two concatenated passes over the upper-triangular pair list: first
/// `(i, j)` for every `i < j` in input order, then the same pairs reversed.
/// Produces exactly `N * (N - 1)` fixtures for `N` teams. Deliberately no
/// interleaving: a team may play consecutive matches, matching the
/// tournament's published fixture order.
pub fn generate_fixtures(teams: &[String]) -> Vec<Fixture> {
    let mut fixtures = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1));

    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            fixtures.push((teams[i].clone(), teams[j].clone()));
        }
    }
    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            fixtures.push((teams[j].clone(), teams[i].clone()));
        }
    }

    fixtures
        .into_iter()
        .enumerate()
        .map(|(index, (home, away))| Fixture {
            number: index as u32 + 1,
            home,
            away,
        })
        .collect()
}

/// Assign one match per day from `start_date`, slots alternating by parity.
pub fn build_schedule(fixtures: &[Fixture], start_date: NaiveDate) -> Vec<ScheduledFixture> {
    fixtures
        .iter()
        .enumerate()
        .map(|(index, fixture)| ScheduledFixture {
            fixture: fixture.clone(),
            date: start_date + Duration::days(index as i64),
            slot: Slot::for_index(index),
        })
        .collect()
}
