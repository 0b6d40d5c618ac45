use crate::moves::BattleMove;
use crate::scoring::ScoringContext;
use log::warn;

/// Expected damage of a move against the opponent's active Pokemon.
///
/// Uses the mean of the oracle's damage rolls. When the oracle cannot produce an
/// estimate the move's base power stands in, which is only good for ranking.
pub fn score_damage(ctx: &ScoringContext<'_>, move_: &BattleMove) -> f32 {
    if move_.base_power == 0 {
        return 0.0;
    }
    let (Some(attacker), Some(defender)) = (&ctx.snapshot.active, &ctx.snapshot.opponent_active)
    else {
        return 0.0;
    };

    match ctx
        .oracle
        .estimate_damage(attacker, defender, move_, Some(ctx.snapshot))
    {
        Ok(rolls) if !rolls.is_empty() => {
            rolls.iter().map(|&d| d as f32).sum::<f32>() / rolls.len() as f32
        }
        Ok(_) => {
            warn!(
                "[{}] damage oracle returned no rolls for {}, using base power",
                ctx.snapshot.battle_id,
                move_.move_id()
            );
            move_.base_power as f32
        }
        Err(err) => {
            warn!(
                "[{}] damage oracle failed for {}: {}, using base power",
                ctx.snapshot.battle_id,
                move_.move_id(),
                err
            );
            move_.base_power as f32
        }
    }
}

/// Highest expected damage among the legal damaging moves.
pub fn best_attack_damage(ctx: &ScoringContext<'_>) -> f32 {
    ctx.snapshot
        .available_moves
        .iter()
        .filter(|mv| mv.is_damaging())
        .map(|mv| score_damage(ctx, mv))
        .fold(0.0, f32::max)
}
