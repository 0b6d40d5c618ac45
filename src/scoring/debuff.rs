use crate::moves::BattleMove;
use crate::scoring::ScoringContext;
use schema::StatType;

/// Stats the move lowers on the opponent, in stat order.
pub fn lowered_stats(move_: &BattleMove) -> impl Iterator<Item = StatType> + '_ {
    move_
        .boosts
        .iter()
        .filter(|(_, &delta)| delta < 0)
        .map(|(&stat, _)| stat)
}

/// Score a move that lowers the opponent's stats.
///
/// Each lowered stat is valued on its own and the best one counts. A stat is
/// worthless once it sits at or below the configured floor, and a defensive drop
/// is worthless unless we hold an attack that hits the lowered side. Repeat drops
/// of the same stat in one battle are worth a fixed fraction of the first.
pub fn score_debuff(ctx: &ScoringContext<'_>, move_: &BattleMove) -> f32 {
    let Some(target) = &ctx.snapshot.opponent_active else {
        return 0.0;
    };
    let config = ctx.config;

    lowered_stats(move_)
        .filter(|&stat| target.stat_stage(stat) > config.debuff_floor_stage)
        .filter(|&stat| {
            stat.exploited_by()
                .map_or(true, |category| ctx.snapshot.has_attack_of(category))
        })
        .map(|stat| {
            let applications = ctx
                .memory
                .debuff_applications(&ctx.snapshot.battle_id, stat);
            if applications == 0 {
                config.debuff_value
            } else {
                config.debuff_value * config.debuff_repeat_fraction
            }
        })
        .fold(0.0, f32::max)
}
