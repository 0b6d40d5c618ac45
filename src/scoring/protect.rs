use crate::scoring::ScoringContext;
use phf::phf_set;

// Abilities that recover HP at the end of every turn, including turns spent protecting.
static PASSIVE_HEALING_ABILITIES: phf::Set<&'static str> = phf_set! {
    "poisonheal",
    "raindish",
    "icebody",
    "dryskin",
};

/// Score a protection move. Repeated use is discouraged since it tends to fail.
pub fn score_protect(ctx: &ScoringContext<'_>) -> f32 {
    let Some(user) = &ctx.snapshot.active else {
        return 0.0;
    };
    let config = ctx.config;
    let counter = user.protect_counter;
    if counter >= config.protect_max_consecutive {
        return 0.0;
    }

    let heals_passively = user
        .ability_id()
        .is_some_and(|ability| PASSIVE_HEALING_ABILITIES.contains(ability.as_str()));

    match (heals_passively, counter) {
        (true, 0) => config.protect_synergy_value,
        (true, _) => config.protect_synergy_value / 2.0,
        (false, 0) => config.protect_scouting_value,
        (false, _) => 0.0,
    }
}
