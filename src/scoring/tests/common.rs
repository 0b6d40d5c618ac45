use crate::battle::calculators::DamageOracle;
use crate::battle::state::BattleSnapshot;
use crate::errors::{OracleError, OracleResult};
use crate::moves::BattleMove;
use crate::pokemon::Pokemon;
use crate::scoring::config::{ScoringConfig, ScoringPolicy};
use crate::scoring::MoveScorer;
use schema::{BaseStats, MoveCategory, PokemonType, SideCondition, StatType, StatusType};

/// A builder for creating test Pokemon with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new("Ferrothorn", vec![PokemonType::Grass, PokemonType::Steel])
///     .with_hp(0.5)
///     .with_status(StatusType::Burn)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    pokemon: Pokemon,
}

impl TestPokemonBuilder {
    /// Creates a full-HP level 100 Pokemon with 80 in every base stat.
    pub fn new(ident: &str, types: Vec<PokemonType>) -> Self {
        let base_stats = BaseStats {
            hp: 80,
            attack: 80,
            defense: 80,
            sp_attack: 80,
            sp_defense: 80,
            speed: 80,
        };
        Self {
            pokemon: Pokemon::new(ident, types, base_stats),
        }
    }

    pub fn with_hp(mut self, hp_fraction: f32) -> Self {
        self.pokemon.hp_fraction = hp_fraction;
        self
    }

    pub fn with_max_hp(mut self, max_hp: u16) -> Self {
        self.pokemon.max_hp = max_hp;
        self
    }

    pub fn with_speed(mut self, speed: u8) -> Self {
        self.pokemon.base_stats.speed = speed;
        self
    }

    pub fn with_status(mut self, status: StatusType) -> Self {
        self.pokemon.status = Some(status);
        self
    }

    pub fn with_ability(mut self, ability: &str) -> Self {
        self.pokemon.ability = Some(ability.to_string());
        self
    }

    pub fn with_boost(mut self, stat: StatType, stage: i8) -> Self {
        self.pokemon.boosts.set(stat, stage);
        self
    }

    pub fn with_protect_counter(mut self, counter: u8) -> Self {
        self.pokemon.protect_counter = counter;
        self
    }

    pub fn fainted(mut self) -> Self {
        self.pokemon.hp_fraction = 0.0;
        self.pokemon.fainted = true;
        self
    }

    pub fn build(self) -> Pokemon {
        self.pokemon
    }
}

/// Damage oracle with canned answers.
pub struct MockOracle {
    rolls: Option<Vec<u16>>,
}

impl MockOracle {
    pub fn with_rolls(rolls: Vec<u16>) -> Self {
        Self { rolls: Some(rolls) }
    }

    pub fn failing() -> Self {
        Self { rolls: None }
    }
}

impl DamageOracle for MockOracle {
    fn estimate_damage(
        &self,
        _attacker: &Pokemon,
        _defender: &Pokemon,
        move_: &BattleMove,
        _context: Option<&BattleSnapshot>,
    ) -> OracleResult<Vec<u16>> {
        self.rolls
            .clone()
            .ok_or_else(|| OracleError::InsufficientData(move_.move_id()))
    }
}

/// Creates a 1v1 snapshot with each active Pokemon as its side's whole team.
pub fn create_test_snapshot(battle_id: &str, ours: Pokemon, theirs: Pokemon) -> BattleSnapshot {
    let mut snapshot = BattleSnapshot::new(battle_id);
    snapshot.team = vec![ours.clone()];
    snapshot.opponent_team = vec![theirs.clone()];
    snapshot.active = Some(ours);
    snapshot.opponent_active = Some(theirs);
    snapshot
}

/// Fills the opponent's roster up to `count` healthy Pokemon, active included.
pub fn with_opponent_bench(mut snapshot: BattleSnapshot, count: usize) -> BattleSnapshot {
    let filler = (snapshot.opponent_team.len()..count)
        .map(|i| TestPokemonBuilder::new(&format!("Bench{}", i), vec![PokemonType::Normal]).build());
    snapshot.opponent_team.extend(filler);
    snapshot
}

/// Fills our roster up to `count` healthy Pokemon, active included.
pub fn with_own_bench(mut snapshot: BattleSnapshot, count: usize) -> BattleSnapshot {
    let filler = (snapshot.team.len()..count)
        .map(|i| TestPokemonBuilder::new(&format!("Reserve{}", i), vec![PokemonType::Normal]).build());
    snapshot.team.extend(filler);
    snapshot
}

pub fn scorer_with_rolls(rolls: Vec<u16>) -> MoveScorer<MockOracle> {
    MoveScorer::new(MockOracle::with_rolls(rolls), ScoringConfig::default())
}

pub fn scorer_with_policy(policy: ScoringPolicy, rolls: Vec<u16>) -> MoveScorer<MockOracle> {
    let config = ScoringConfig {
        policy,
        ..ScoringConfig::default()
    };
    MoveScorer::new(MockOracle::with_rolls(rolls), config)
}

pub fn attack(id: &str, move_type: PokemonType, category: MoveCategory, base_power: u16) -> BattleMove {
    BattleMove::new(id, move_type, category, base_power)
}

pub fn hazard_move(id: &str, condition: SideCondition) -> BattleMove {
    let mut move_ = BattleMove::new(id, PokemonType::Rock, MoveCategory::Status, 0);
    move_.side_condition = Some(condition);
    move_
}

pub fn setup_move(id: &str, boosts: &[(StatType, i8)]) -> BattleMove {
    let mut move_ = BattleMove::new(id, PokemonType::Normal, MoveCategory::Status, 0);
    move_.self_boosts = boosts.iter().copied().collect();
    move_
}

pub fn status_move(id: &str, status: StatusType, accuracy: f32) -> BattleMove {
    let mut move_ = BattleMove::new(id, PokemonType::Normal, MoveCategory::Status, 0);
    move_.status = Some(status);
    move_.accuracy = accuracy;
    move_
}

pub fn protect_move() -> BattleMove {
    let mut move_ = BattleMove::new("Protect", PokemonType::Normal, MoveCategory::Status, 0);
    move_.is_protect = true;
    move_
}

pub fn debuff_move(id: &str, boosts: &[(StatType, i8)]) -> BattleMove {
    let mut move_ = BattleMove::new(id, PokemonType::Normal, MoveCategory::Status, 0);
    move_.boosts = boosts.iter().copied().collect();
    move_
}
