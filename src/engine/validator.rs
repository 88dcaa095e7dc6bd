//! Squad validation — the per-team balance report.

use std::collections::HashMap;

use crate::models::{Player, Role, TeamBalance};

/// Build one [`TeamBalance`] per distinct team, in first-appearance order.
///
/// Pure function of the roster: groups players by team, counts roles and
/// foreign players, and averages ratings (unrounded internally; the report
/// serializes the average rounded to two decimals).
pub fn build_balance_report(roster: &[Player]) -> Vec<TeamBalance> {
    let mut order: Vec<&str> = Vec::new();
    let mut squads: HashMap<&str, Vec<&Player>> = HashMap::new();

    for player in roster {
        let squad = squads.entry(player.team.as_str()).or_default();
        if squad.is_empty() {
            order.push(player.team.as_str());
        }
        squad.push(player);
    }

    order
        .into_iter()
        .map(|team| balance_for(team, &squads[team]))
        .collect()
}

fn balance_for(team: &str, squad: &[&Player]) -> TeamBalance {
    let count_role = |role: Role| squad.iter().filter(|p| p.role == role).count() as u32;

    let batters = count_role(Role::Batter);
    let wicketkeepers = count_role(Role::Wicketkeeper);
    let allrounders = count_role(Role::Allrounder);
    let bowlers = count_role(Role::Bowler);
    let foreign_players = squad.iter().filter(|p| p.is_foreign()).count() as u32;

    let average_rating = if squad.is_empty() {
        0.0
    } else {
        squad.iter().map(|p| p.rating).sum::<f64>() / squad.len() as f64
    };

    TeamBalance {
        team: team.to_string(),
        total_players: squad.len() as u32,
        foreign_players,
        batters,
        wicketkeepers,
        allrounders,
        bowlers,
        average_rating,
        balanced: TeamBalance::meets_criteria(
            batters,
            wicketkeepers,
            allrounders,
            bowlers,
            foreign_players,
        ),
    }
}
