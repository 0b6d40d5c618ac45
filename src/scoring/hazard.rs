use crate::scoring::config::ScoringPolicy;
use crate::scoring::ScoringContext;
use schema::SideCondition;

/// Score setting an entry hazard on the opponent's side.
///
/// Worth nothing if the hazard is already up or too few opponents are left to
/// switch into it.
pub fn score_hazard(ctx: &ScoringContext<'_>, condition: SideCondition) -> f32 {
    if ctx.snapshot.opponent_side_conditions.contains(&condition) {
        return 0.0;
    }

    let remaining = ctx.snapshot.opponent_remaining_pokemon();
    if remaining < ctx.config.hazard_min_opponents {
        return 0.0;
    }

    match ctx.config.policy {
        ScoringPolicy::Fixed => ctx.config.hazard_value,
        ScoringPolicy::Dynamic => {
            remaining as f32 * ctx.config.switches_per_pokemon * ctx.config.hazard_damage_per_switch
        }
    }
}
