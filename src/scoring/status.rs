use crate::battle::stats::max_hp;
use crate::moves::BattleMove;
use crate::pokemon::Pokemon;
use crate::scoring::config::ScoringPolicy;
use crate::scoring::ScoringContext;
use schema::{PokemonType, StatusType};

/// Typings that can never receive the given status.
fn is_status_immune(target: &Pokemon, status: StatusType) -> bool {
    let has_type = |t: PokemonType| target.types.contains(&t);
    match status {
        StatusType::Burn => has_type(PokemonType::Fire),
        StatusType::Paralysis => has_type(PokemonType::Electric),
        StatusType::Poison | StatusType::Toxic => {
            has_type(PokemonType::Poison) || has_type(PokemonType::Steel)
        }
        StatusType::Freeze => has_type(PokemonType::Ice),
        StatusType::Sleep => false,
    }
}

/// Score a move whose main effect is inflicting a major status.
pub fn score_status(ctx: &ScoringContext<'_>, move_: &BattleMove, status: StatusType) -> f32 {
    let Some(target) = &ctx.snapshot.opponent_active else {
        return 0.0;
    };
    if target.has_status() || is_status_immune(target, status) {
        return 0.0;
    }

    let config = ctx.config;
    let high_band = move_.accuracy >= config.status_high_accuracy;
    if !high_band && move_.accuracy < config.status_low_accuracy {
        return 0.0;
    }

    match config.policy {
        ScoringPolicy::Fixed => {
            if high_band {
                config.status_high_value
            } else {
                config.status_reduced_value
            }
        }
        ScoringPolicy::Dynamic => {
            let accuracy_factor = if high_band {
                1.0
            } else {
                config.status_reduced_factor
            };
            max_hp(target) as f32
                * config.status_chip_fraction
                * ctx.remaining_turns()
                * accuracy_factor
        }
    }
}
