//! Match outcome resolution.
//!
//! A single weighted coin-flip, not a modeled contest: the higher effective
//! rating is the favorite and wins 70% of resolutions.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Rating multiplier for a balanced squad.
pub const BALANCE_BONUS: f64 = 1.1;
/// Rating multiplier for an unbalanced squad.
pub const IMBALANCE_PENALTY: f64 = 0.9;
/// Draws below this threshold go to the underdog.
pub const UPSET_THRESHOLD: f64 = 0.3;

/// Source of uniform `[0, 1)` draws.
///
/// Injectable so outcome determinism is testable: production uses entropy,
/// reproducible runs use a seed, tests script the draws.
pub trait RandomSource: Send + Sync {
    /// A uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// A uniform draw in the half-open `[lo, hi)`. Callers rounding to two
    /// decimals see the same distribution as a closed `[lo, hi]` draw.
    fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

/// Entropy-seeded source for live tournaments. Backed by [`StdRng`] rather
/// than `ThreadRng` so the boxed source stays `Send` inside the shared
/// session.
pub struct EntropySource(StdRng);

impl Default for EntropySource {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl RandomSource for EntropySource {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Deterministic source for reproducible tournaments (`--seed`).
pub struct SeededSource(ChaCha8Rng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// A team's resolution inputs: average rating and balance flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamStrength {
    pub rating: f64,
    pub balanced: bool,
}

impl TeamStrength {
    /// Base rating weighted by squad balance.
    pub fn effective_rating(&self) -> f64 {
        let multiplier = if self.balanced {
            BALANCE_BONUS
        } else {
            IMBALANCE_PENALTY
        };
        self.rating * multiplier
    }
}

/// Resolve a match between `home` and `away`, returning the winner's name.
///
/// The favorite is the side with the strictly higher effective rating; an
/// exact tie makes the second-named team the favorite (it falls to the else
/// branch, documented edge case, not a draw). The favorite wins when the
/// draw is >= [`UPSET_THRESHOLD`]. Teams missing from the lookup resolve
/// with a default (zero, unbalanced) strength.
pub fn resolve(
    home: &str,
    away: &str,
    strengths: &HashMap<String, TeamStrength>,
    rng: &mut dyn RandomSource,
) -> String {
    let home_rating = strengths.get(home).copied().unwrap_or_default().effective_rating();
    let away_rating = strengths.get(away).copied().unwrap_or_default().effective_rating();

    let (favorite, underdog) = if home_rating > away_rating {
        (home, away)
    } else {
        (away, home)
    };

    let winner = if rng.next_unit() >= UPSET_THRESHOLD {
        favorite
    } else {
        underdog
    };
    winner.to_string()
}

/// Test-only source replaying a fixed script of draws.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    draws: Vec<f64>,
    position: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(draws: Vec<f64>) -> Self {
        Self { draws, position: 0 }
    }

    /// A source whose every draw is `value`.
    pub(crate) fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw
    }
}
