//! Team balance report — squad composition per team.

use serde::Serialize;

/// Per-team squad composition summary, derived once from the roster.
///
/// `average_rating` is kept unrounded internally; it serializes rounded to
/// two decimals, which is how the balance report quotes it.
#[derive(Debug, Clone, Serialize)]
pub struct TeamBalance {
    pub team: String,
    pub total_players: u32,
    pub foreign_players: u32,
    pub batters: u32,
    pub wicketkeepers: u32,
    pub allrounders: u32,
    pub bowlers: u32,
    #[serde(serialize_with = "crate::serialize_round2")]
    pub average_rating: f64,
    pub balanced: bool,
}

impl TeamBalance {
    /// Whether the role and foreign-player counts meet the balance criteria.
    ///
    /// A team with zero players fails every role range and is simply
    /// unbalanced, never an error.
    pub fn meets_criteria(
        batters: u32,
        wicketkeepers: u32,
        allrounders: u32,
        bowlers: u32,
        foreign_players: u32,
    ) -> bool {
        (4..=6).contains(&batters)
            && (1..=2).contains(&wicketkeepers)
            && (2..=3).contains(&allrounders)
            && (3..=5).contains(&bowlers)
            && foreign_players <= 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_balanced_squad() {
        // 4 batters, 1 keeper, 2 allrounders, 4 bowlers, 2 foreign.
        assert!(TeamBalance::meets_criteria(4, 1, 2, 4, 2));
    }

    #[test]
    fn test_batter_boundaries() {
        assert!(TeamBalance::meets_criteria(4, 1, 2, 4, 0));
        assert!(TeamBalance::meets_criteria(6, 1, 2, 4, 0));
        assert!(!TeamBalance::meets_criteria(3, 1, 2, 4, 0));
        assert!(!TeamBalance::meets_criteria(7, 1, 2, 4, 0));
    }

    #[test]
    fn test_wicketkeeper_boundaries() {
        assert!(TeamBalance::meets_criteria(4, 2, 2, 4, 0));
        assert!(!TeamBalance::meets_criteria(4, 0, 2, 4, 0));
        assert!(!TeamBalance::meets_criteria(4, 3, 2, 4, 0));
    }

    #[test]
    fn test_allrounder_boundaries() {
        assert!(TeamBalance::meets_criteria(4, 1, 3, 4, 0));
        assert!(!TeamBalance::meets_criteria(4, 1, 1, 4, 0));
        assert!(!TeamBalance::meets_criteria(4, 1, 4, 4, 0));
    }

    #[test]
    fn test_bowler_boundaries() {
        assert!(TeamBalance::meets_criteria(4, 1, 2, 3, 0));
        assert!(TeamBalance::meets_criteria(4, 1, 2, 5, 0));
        assert!(!TeamBalance::meets_criteria(4, 1, 2, 2, 0));
        assert!(!TeamBalance::meets_criteria(4, 1, 2, 6, 0));
    }

    #[test]
    fn test_foreign_limit() {
        assert!(TeamBalance::meets_criteria(4, 1, 2, 4, 4));
        assert!(!TeamBalance::meets_criteria(4, 1, 2, 4, 5));
    }

    #[test]
    fn test_empty_squad_is_unbalanced() {
        assert!(!TeamBalance::meets_criteria(0, 0, 0, 0, 0));
    }

    #[test]
    fn test_rating_serializes_rounded() {
        let balance = TeamBalance {
            team: "Chennai".to_string(),
            total_players: 11,
            foreign_players: 2,
            batters: 4,
            wicketkeepers: 1,
            allrounders: 2,
            bowlers: 4,
            average_rating: 87.456789,
            balanced: true,
        };
        let json = serde_json::to_string(&balance).unwrap();
        assert!(json.contains("87.46"));
    }
}
