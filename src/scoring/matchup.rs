use crate::battle::stats::best_type_multiplier;
use crate::pokemon::Pokemon;
use crate::scoring::config::ScoringConfig;
use std::cmp::Ordering;

/// Signed estimate of how well `ours` fares against `theirs`.
///
/// Positive favors us. Combines the best type multiplier each side can hit the
/// other with, a base speed comparison, and the HP difference.
pub fn estimate_matchup(ours: &Pokemon, theirs: &Pokemon) -> f32 {
    let offense = 2.0 * (best_type_multiplier(&ours.types, &theirs.types) - 1.0);
    let defense = 2.0 * (best_type_multiplier(&theirs.types, &ours.types) - 1.0);

    let speed = match ours.base_stats.speed.cmp(&theirs.base_stats.speed) {
        Ordering::Greater => 1.0,
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
    };

    let hp = 2.0 * (ours.current_hp_fraction() - theirs.current_hp_fraction());

    offense - defense + speed + hp
}

/// Whether spending a turn on a setup move is safe.
pub fn is_setup_favorable(ours: &Pokemon, theirs: &Pokemon, config: &ScoringConfig) -> bool {
    ours.current_hp_fraction() >= config.setup_min_hp
        && estimate_matchup(ours, theirs) >= config.setup_min_matchup
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::{BaseStats, PokemonType};

    fn mon(types: Vec<PokemonType>, speed: u8, hp: f32) -> Pokemon {
        let base = BaseStats {
            speed,
            ..BaseStats::default()
        };
        let mut pokemon = Pokemon::new("Test", types, base);
        pokemon.hp_fraction = hp;
        pokemon
    }

    #[test]
    fn test_type_advantage_speed_and_hp_combine() {
        let ours = mon(vec![PokemonType::Water], 100, 1.0);
        let theirs = mon(vec![PokemonType::Fire], 80, 0.5);
        // offense 2*(2-1)=2, defense 2*(0.5-1)=-1, speed +1, hp 2*0.5=1
        assert_eq!(estimate_matchup(&ours, &theirs), 5.0);
        assert_eq!(estimate_matchup(&theirs, &ours), -5.0);
    }

    #[test]
    fn test_neutral_mirror_is_zero() {
        let ours = mon(vec![PokemonType::Normal], 90, 1.0);
        let theirs = mon(vec![PokemonType::Normal], 90, 1.0);
        assert_eq!(estimate_matchup(&ours, &theirs), 0.0);
        assert!(is_setup_favorable(&ours, &theirs, &ScoringConfig::default()));
    }

    #[test]
    fn test_low_hp_is_never_favorable() {
        let ours = mon(vec![PokemonType::Water], 120, 0.5);
        let theirs = mon(vec![PokemonType::Fire], 50, 0.1);
        assert!(estimate_matchup(&ours, &theirs) > 0.0);
        assert!(!is_setup_favorable(&ours, &theirs, &ScoringConfig::default()));
    }
}
