//! The move scorer: routes each legal move to the evaluator its shape calls for.
//!
//! Scores are plain `f32` values on a shared scale. Damaging moves score their
//! expected damage and every other evaluator produces values tuned against that.

pub mod config;
pub mod damage;
pub mod debuff;
pub mod hazard;
pub mod matchup;
pub mod memory;
pub mod protect;
pub mod setup;
pub mod status;
pub mod utility;

#[cfg(test)]
pub(crate) mod tests;

use crate::battle::calculators::{DamageOracle, FormulaOracle};
use crate::battle::state::BattleSnapshot;
use crate::moves::{BattleMove, MoveKind, UtilityKind};
use config::ScoringConfig;
use log::debug;
use memory::BattleMemory;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// Everything an evaluator may look at for one decision.
pub struct ScoringContext<'a> {
    pub snapshot: &'a BattleSnapshot,
    pub config: &'a ScoringConfig,
    pub memory: &'a BattleMemory,
    pub oracle: &'a dyn DamageOracle,
}

impl<'a> ScoringContext<'a> {
    /// Rough number of turns left in the battle, never below the configured minimum.
    pub fn remaining_turns(&self) -> f32 {
        let estimate = self
            .config
            .expected_battle_turns
            .saturating_sub(self.snapshot.turn);
        estimate.max(self.config.min_remaining_turns) as f32
    }
}

/// One legal move with the score it was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMove {
    pub index: usize,
    pub move_id: String,
    pub kind: String,
    pub score: f32,
}

pub struct MoveScorer<O: DamageOracle = FormulaOracle> {
    oracle: O,
    config: ScoringConfig,
    memory: BattleMemory,
}

impl Default for MoveScorer<FormulaOracle> {
    fn default() -> Self {
        Self::new(FormulaOracle::new(), ScoringConfig::default())
    }
}

impl<O: DamageOracle> MoveScorer<O> {
    pub fn new(oracle: O, config: ScoringConfig) -> Self {
        Self {
            oracle,
            config,
            memory: BattleMemory::new(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn memory(&self) -> &BattleMemory {
        &self.memory
    }

    fn context<'a>(&'a self, snapshot: &'a BattleSnapshot) -> ScoringContext<'a> {
        ScoringContext {
            snapshot,
            config: &self.config,
            memory: &self.memory,
            oracle: &self.oracle,
        }
    }

    /// Score a single move in the given battle state.
    pub fn score_move(&self, snapshot: &BattleSnapshot, move_: &BattleMove) -> f32 {
        let ctx = self.context(snapshot);
        let kind = move_.kind();
        let score = match kind {
            MoveKind::Hazard(condition) => hazard::score_hazard(&ctx, condition),
            MoveKind::Setup => setup::score_setup(&ctx, move_),
            MoveKind::Status(inflicted) => status::score_status(&ctx, move_, inflicted),
            MoveKind::Protect => protect::score_protect(&ctx),
            MoveKind::Debuff => debuff::score_debuff(&ctx, move_),
            MoveKind::Utility(utility_kind) => utility::score_utility(&ctx, move_, utility_kind),
            MoveKind::Damage => damage::score_damage(&ctx, move_),
        };
        debug!(
            "[{}] turn {}: {} scored {:.1} as {}",
            snapshot.battle_id,
            snapshot.turn,
            move_.move_id(),
            score,
            kind
        );
        score
    }

    /// Score every legal move, in the order the client listed them.
    pub fn score_moves(&self, snapshot: &BattleSnapshot) -> Vec<ScoredMove> {
        snapshot
            .available_moves
            .iter()
            .enumerate()
            .map(|(index, move_)| ScoredMove {
                index,
                move_id: move_.move_id(),
                kind: move_.kind().to_string(),
                score: self.score_move(snapshot, move_),
            })
            .collect()
    }

    /// The highest-scoring legal move, with the full score list.
    /// Ties go to the move listed first.
    pub fn best_move(&self, snapshot: &BattleSnapshot) -> (Option<ScoredMove>, Vec<ScoredMove>) {
        let scores = self.score_moves(snapshot);
        let mut best: Option<&ScoredMove> = None;
        for scored in &scores {
            let better = best.map_or(true, |current| {
                OrderedFloat(scored.score) > OrderedFloat(current.score)
            });
            if better {
                best = Some(scored);
            }
        }
        (best.cloned(), scores)
    }

    /// Note the move the agent committed to, for scoring later turns.
    pub fn record_choice(&self, snapshot: &BattleSnapshot, move_: &BattleMove) {
        match move_.kind() {
            MoveKind::Debuff => {
                for stat in debuff::lowered_stats(move_) {
                    self.memory.record_debuff(&snapshot.battle_id, stat);
                }
            }
            MoveKind::Utility(kind @ UtilityKind::ItemSwap) => {
                self.memory.claim_one_shot(&snapshot.battle_id, kind);
            }
            _ => {}
        }
    }
}
