//! The damage-oracle seam and a formula-based oracle.
//!
//! The scorer only ever talks to [`DamageOracle`]; the battle client may plug in a
//! full damage calculator. [`FormulaOracle`] is a self-contained estimate built on
//! the standard damage formula, good enough to rank moves.

use crate::battle::state::BattleSnapshot;
use crate::battle::stats::{effective_stat, max_hp};
use crate::errors::{OracleError, OracleResult};
use crate::moves::BattleMove;
use crate::pokemon::Pokemon;
use schema::{BaseStats, MoveCategory, PokemonType, SideCondition, StatType, StatusType};

/// Damage rolls span 85%..=100% of the base damage.
pub const DAMAGE_ROLLS: std::ops::RangeInclusive<u32> = 85..=100;

/// Estimates the damage one Pokemon deals to another with a given move.
pub trait DamageOracle: Send + Sync {
    /// Returns every plausible damage value, or an error when no estimate is possible.
    /// `context` may be `None`, in which case field effects are ignored.
    fn estimate_damage(
        &self,
        attacker: &Pokemon,
        defender: &Pokemon,
        move_: &BattleMove,
        context: Option<&BattleSnapshot>,
    ) -> OracleResult<Vec<u16>>;

    /// Whether even the lowest roll knocks out the defender from its current HP.
    fn guarantees_ohko(&self, attacker: &Pokemon, defender: &Pokemon, move_: &BattleMove) -> bool {
        let remaining_hp = (defender.current_hp_fraction() * max_hp(defender) as f32).ceil() as u16;
        match self.estimate_damage(attacker, defender, move_, None) {
            Ok(rolls) => rolls
                .iter()
                .min()
                .is_some_and(|&lowest| lowest > 0 && lowest >= remaining_hp),
            Err(_) => false,
        }
    }
}

/// Standard-formula damage estimate from base stats, stages, STAB and typing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormulaOracle;

impl FormulaOracle {
    pub fn new() -> Self {
        Self
    }

    fn screen_applies(
        defender: &Pokemon,
        category: MoveCategory,
        context: Option<&BattleSnapshot>,
    ) -> bool {
        let Some(snapshot) = context else {
            return false;
        };
        let defender_is_opponent = snapshot
            .opponent_active
            .as_ref()
            .is_some_and(|p| p.ident == defender.ident);
        let conditions = if defender_is_opponent {
            &snapshot.opponent_side_conditions
        } else {
            &snapshot.side_conditions
        };
        let screen = match category {
            MoveCategory::Physical => SideCondition::Reflect,
            MoveCategory::Special => SideCondition::LightScreen,
            MoveCategory::Status => return false,
        };
        conditions.contains(&screen) || conditions.contains(&SideCondition::AuroraVeil)
    }
}

impl DamageOracle for FormulaOracle {
    fn estimate_damage(
        &self,
        attacker: &Pokemon,
        defender: &Pokemon,
        move_: &BattleMove,
        context: Option<&BattleSnapshot>,
    ) -> OracleResult<Vec<u16>> {
        let (attack_stat, defense_stat) = match move_.category {
            MoveCategory::Physical => (StatType::Atk, StatType::Def),
            MoveCategory::Special => (StatType::SpA, StatType::SpD),
            MoveCategory::Status => return Err(OracleError::NonDamaging(move_.move_id())),
        };
        if move_.base_power == 0 {
            return Err(OracleError::InsufficientData(format!(
                "{} has no fixed base power",
                move_.move_id()
            )));
        }
        for pokemon in [attacker, defender] {
            if pokemon.base_stats == BaseStats::default() || pokemon.types.is_empty() {
                return Err(OracleError::InsufficientData(format!(
                    "missing stats or typing for {}",
                    pokemon.ident
                )));
            }
        }

        let effectiveness = PokemonType::effectiveness_against(move_.move_type, &defender.types);
        if effectiveness == 0.0 {
            return Ok(vec![0; DAMAGE_ROLLS.count()]);
        }

        let attack = effective_stat(attacker, attack_stat).max(1) as u32;
        let defense = effective_stat(defender, defense_stat).max(1) as u32;
        let level_factor = 2 * attacker.level as u32 / 5 + 2;
        let base_damage = level_factor * move_.base_power as u32 * attack / defense / 50 + 2;

        let mut modifier = effectiveness;
        if attacker.types.contains(&move_.move_type) {
            modifier *= 1.5;
        }
        if move_.category == MoveCategory::Physical && attacker.status == Some(StatusType::Burn) {
            modifier *= 0.5;
        }
        if Self::screen_applies(defender, move_.category, context) {
            modifier *= 0.5;
        }

        let rolls = DAMAGE_ROLLS
            .map(|roll| {
                let rolled = base_damage * roll / 100;
                ((rolled as f32 * modifier).floor() as u16).max(1)
            })
            .collect();
        Ok(rolls)
    }
}
