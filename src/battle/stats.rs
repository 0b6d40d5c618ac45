use crate::pokemon::Pokemon;
use schema::{PokemonType, StatType, StatusType};

// Fixed spread assumed for every Pokemon: perfect IVs, 84 EVs, neutral nature.
const ASSUMED_IV: u32 = 31;
const ASSUMED_EV: u32 = 84;

/// Calculate a non-HP stat from its base value at the given level.
pub fn calculate_stat(base: u8, level: u8) -> u16 {
    let raw = (2 * base as u32 + ASSUMED_IV + ASSUMED_EV / 4) * level as u32 / 100;
    (raw + 5) as u16
}

/// Calculate max HP from the base HP value at the given level.
pub fn calculate_hp(base: u8, level: u8) -> u16 {
    let raw = (2 * base as u32 + ASSUMED_IV + ASSUMED_EV / 4) * level as u32 / 100;
    (raw + level as u32 + 10) as u16
}

/// Max HP as reported, or derived from base stats when the client did not report it.
pub fn max_hp(pokemon: &Pokemon) -> u16 {
    if pokemon.max_hp > 0 {
        pokemon.max_hp
    } else {
        calculate_hp(pokemon.base_stats.hp, pokemon.level)
    }
}

/// Apply stat stage multipliers according to the standard formula.
/// Stages range from -6 to +6.
pub fn stat_stage_multiplier(stage: i8) -> f32 {
    let stage = stage.clamp(-6, 6) as f32;
    if stage >= 0.0 {
        (2.0 + stage) / 2.0
    } else {
        2.0 / (2.0 - stage)
    }
}

fn base_value(pokemon: &Pokemon, stat: StatType) -> Option<u8> {
    let base = &pokemon.base_stats;
    match stat {
        StatType::Atk => Some(base.attack),
        StatType::Def => Some(base.defense),
        StatType::SpA => Some(base.sp_attack),
        StatType::SpD => Some(base.sp_defense),
        StatType::Spe => Some(base.speed),
        StatType::Accuracy | StatType::Evasion => None,
    }
}

/// Calculate an in-battle stat including stat stages and paralysis.
/// Returns 0 for accuracy/evasion, which have no underlying stat.
pub fn effective_stat(pokemon: &Pokemon, stat: StatType) -> u16 {
    let Some(base) = base_value(pokemon, stat) else {
        return 0;
    };
    let raw = calculate_stat(base, pokemon.level) as f32;
    let mut value = raw * stat_stage_multiplier(pokemon.stat_stage(stat));

    if stat == StatType::Spe && pokemon.status == Some(StatusType::Paralysis) {
        value *= 0.5;
    }

    value.floor() as u16
}

/// Highest multiplier any of the attacker's own types deals to the defender.
pub fn best_type_multiplier(attacker_types: &[PokemonType], defender_types: &[PokemonType]) -> f32 {
    attacker_types
        .iter()
        .map(|&attacking| PokemonType::effectiveness_against(attacking, defender_types))
        .fold(None, |best: Option<f32>, m| Some(best.map_or(m, |b| b.max(m))))
        .unwrap_or(1.0)
}
