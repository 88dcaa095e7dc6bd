//! Playoff bracket resolution.
//!
//! A fixed four-team bracket seeded from the final league ranking:
//! Qualifier 1 (1st vs 2nd) → Eliminator (3rd vs 4th) →
//! Qualifier 2 (Q1 loser vs Eliminator winner) → Final (Q1 winner vs
//! Q2 winner). One external trigger advances exactly one stage.

use std::collections::HashMap;

use serde::Serialize;

use crate::engine::resolver::{resolve, RandomSource, TeamStrength};
use crate::models::{FinalPlacings, PlayoffPhase, PlayoffStage, StageResult};

/// The bracket state machine. Monotonic: phases only move forward, completed
/// stage results are never re-simulated, and triggers past `Complete` are
/// no-ops.
#[derive(Debug, Clone, Serialize)]
pub struct PlayoffBracket {
    /// League top 4 in rank order; seeds never change once the bracket exists.
    seeds: [String; 4],
    phase: PlayoffPhase,
    results: Vec<StageResult>,
}

impl PlayoffBracket {
    pub fn new(seeds: [String; 4]) -> Self {
        Self {
            seeds,
            phase: PlayoffPhase::AwaitingQualifier1,
            results: Vec::new(),
        }
    }

    pub fn phase(&self) -> PlayoffPhase {
        self.phase
    }

    pub fn seeds(&self) -> &[String; 4] {
        &self.seeds
    }

    /// Stage outcomes in the order they were played.
    pub fn results(&self) -> &[StageResult] {
        &self.results
    }

    pub fn stage_result(&self, stage: PlayoffStage) -> Option<&StageResult> {
        self.results.iter().find(|r| r.stage == stage)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PlayoffPhase::Complete
    }

    /// Final placings, available once the bracket is complete: champion,
    /// runner-up, and the Qualifier 2 loser in third.
    pub fn placings(&self) -> Option<FinalPlacings> {
        let final_result = self.stage_result(PlayoffStage::Final)?;
        let qualifier2 = self.stage_result(PlayoffStage::Qualifier2)?;
        Some(FinalPlacings {
            first: final_result.winner.clone(),
            second: final_result.loser.clone(),
            third: qualifier2.loser.clone(),
        })
    }

    /// Run the next stage and advance one phase. Returns `None` once the
    /// bracket is complete (repeated triggers are safe no-ops).
    pub fn advance(
        &mut self,
        strengths: &HashMap<String, TeamStrength>,
        rng: &mut dyn RandomSource,
    ) -> Option<StageResult> {
        let (stage, home, away, next_phase) = match self.phase {
            PlayoffPhase::AwaitingQualifier1 => (
                PlayoffStage::Qualifier1,
                self.seeds[0].clone(),
                self.seeds[1].clone(),
                PlayoffPhase::AwaitingEliminator,
            ),
            PlayoffPhase::AwaitingEliminator => (
                PlayoffStage::Eliminator,
                self.seeds[2].clone(),
                self.seeds[3].clone(),
                PlayoffPhase::AwaitingQualifier2,
            ),
            PlayoffPhase::AwaitingQualifier2 => {
                let qualifier1 = self.stage_result(PlayoffStage::Qualifier1)?;
                let eliminator = self.stage_result(PlayoffStage::Eliminator)?;
                (
                    PlayoffStage::Qualifier2,
                    qualifier1.loser.clone(),
                    eliminator.winner.clone(),
                    PlayoffPhase::AwaitingFinal,
                )
            }
            PlayoffPhase::AwaitingFinal => {
                let qualifier1 = self.stage_result(PlayoffStage::Qualifier1)?;
                let qualifier2 = self.stage_result(PlayoffStage::Qualifier2)?;
                (
                    PlayoffStage::Final,
                    qualifier1.winner.clone(),
                    qualifier2.winner.clone(),
                    PlayoffPhase::Complete,
                )
            }
            PlayoffPhase::Complete => return None,
        };

        let winner = resolve(&home, &away, strengths, rng);
        let result = StageResult::new(stage, home, away, winner);
        tracing::info!(stage = %result.stage, winner = %result.winner, "Playoff stage resolved");

        self.results.push(result.clone());
        self.phase = next_phase;
        Some(result)
    }
}
