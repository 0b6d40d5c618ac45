use crate::moves::{BattleMove, UtilityKind};
use crate::scoring::damage::score_damage;
use crate::scoring::ScoringContext;
use log::debug;

/// Score the identifier-keyed utility families.
pub fn score_utility(ctx: &ScoringContext<'_>, move_: &BattleMove, kind: UtilityKind) -> f32 {
    let config = ctx.config;
    match kind {
        UtilityKind::ItemSwap => {
            if ctx.memory.is_one_shot_used(&ctx.snapshot.battle_id, kind) {
                debug!(
                    "[{}] {} already used this battle",
                    ctx.snapshot.battle_id,
                    move_.move_id()
                );
                0.0
            } else {
                config.item_swap_per_turn * ctx.remaining_turns()
            }
        }
        UtilityKind::HazardRemoval => {
            // Any condition on our side counts, not only hazards.
            let has_conditions = !ctx.snapshot.side_conditions.is_empty();
            let remaining = ctx.snapshot.remaining_pokemon();
            if has_conditions && remaining >= config.hazard_removal_min_team {
                config.hazard_removal_per_pokemon * remaining as f32
            } else {
                0.0
            }
        }
        UtilityKind::Pivot => score_damage(ctx, move_),
        UtilityKind::Unclassified => config.unclassified_value,
    }
}
