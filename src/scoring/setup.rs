use crate::moves::BattleMove;
use crate::pokemon::MAX_STAT_STAGE;
use crate::scoring::config::ScoringPolicy;
use crate::scoring::damage::best_attack_damage;
use crate::scoring::matchup::is_setup_favorable;
use crate::scoring::ScoringContext;

/// Score a move that raises the user's own stats.
///
/// Zero unless the user is healthy and the matchup favors it, and zero when every
/// raised stat is already at +6.
pub fn score_setup(ctx: &ScoringContext<'_>, move_: &BattleMove) -> f32 {
    let (Some(ours), Some(theirs)) = (&ctx.snapshot.active, &ctx.snapshot.opponent_active) else {
        return 0.0;
    };
    if !is_setup_favorable(ours, theirs, ctx.config) {
        return 0.0;
    }

    // Stages the move can still add, capped by the room left below +6.
    let usable_stages: i32 = move_
        .self_boosts
        .iter()
        .filter(|(_, &delta)| delta > 0)
        .map(|(&stat, &delta)| delta.min(MAX_STAT_STAGE - ours.stat_stage(stat)).max(0) as i32)
        .sum();
    if usable_stages == 0 {
        return 0.0;
    }

    let config = ctx.config;
    let value = match config.policy {
        ScoringPolicy::Fixed => config.setup_value,
        ScoringPolicy::Dynamic => {
            let current_damage = best_attack_damage(ctx);
            let already_ohkos = ctx.snapshot.available_moves.iter().any(|mv| {
                mv.is_damaging() && ctx.oracle.guarantees_ohko(ours, theirs, mv)
            });
            if already_ohkos {
                config.setup_min_value
            } else {
                // boost_damage_gain is the extra damage fraction of a standard +2 boost.
                let gain_per_attack =
                    current_damage * config.boost_damage_gain * usable_stages as f32 / 2.0;
                let estimate = gain_per_attack * config.setup_expected_attacks - current_damage;
                estimate.max(config.setup_min_value)
            }
        }
    };

    if move_.lowers_own_stats() {
        value * config.setup_drawback_factor
    } else {
        value
    }
}
