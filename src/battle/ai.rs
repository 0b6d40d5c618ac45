//! Agents that turn a battle snapshot into one action per turn.

use crate::battle::calculators::{DamageOracle, FormulaOracle};
use crate::battle::state::BattleSnapshot;
use crate::player::PlayerAction;
use crate::pokemon::Pokemon;
use crate::scoring::{MoveScorer, ScoredMove};
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::seq::IndexedRandom;

/// A trait for any system that can decide on a battle action.
pub trait Behavior {
    /// Inspects the snapshot and decides on the next action.
    fn decide_action(&self, snapshot: &BattleSnapshot) -> PlayerAction;
}

/// What to do when there is neither a move nor a switch to pick.
pub trait FallbackPolicy: Send + Sync {
    fn fallback(&self, snapshot: &BattleSnapshot) -> PlayerAction;
}

/// Uniformly random legal action, or `Default` when nothing is legal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFallback;

impl FallbackPolicy for RandomFallback {
    fn fallback(&self, snapshot: &BattleSnapshot) -> PlayerAction {
        snapshot
            .legal_actions()
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or(PlayerAction::Default)
    }
}

/// The healthiest legal switch target. Ties go to the one listed first.
pub fn healthiest_switch(snapshot: &BattleSnapshot) -> Option<&Pokemon> {
    snapshot.legal_switches().reduce(|best, candidate| {
        if OrderedFloat(candidate.current_hp_fraction()) > OrderedFloat(best.current_hp_fraction()) {
            candidate
        } else {
            best
        }
    })
}

fn switch_or_fallback(snapshot: &BattleSnapshot, fallback: &dyn FallbackPolicy) -> PlayerAction {
    if let Some(target) = healthiest_switch(snapshot) {
        return PlayerAction::SwitchPokemon {
            ident: target.ident.clone(),
        };
    }
    debug!(
        "[{}] no legal move or switch, using fallback",
        snapshot.battle_id
    );
    fallback.fallback(snapshot)
}

/// Picks the best-scoring move, else the healthiest switch, else the fallback.
pub struct HeuristicAgent<O: DamageOracle = FormulaOracle> {
    scorer: MoveScorer<O>,
    fallback: Box<dyn FallbackPolicy>,
}

impl Default for HeuristicAgent<FormulaOracle> {
    fn default() -> Self {
        Self::new(MoveScorer::default())
    }
}

impl<O: DamageOracle> HeuristicAgent<O> {
    pub fn new(scorer: MoveScorer<O>) -> Self {
        Self {
            scorer,
            fallback: Box::new(RandomFallback),
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn FallbackPolicy>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn scorer(&self) -> &MoveScorer<O> {
        &self.scorer
    }

    /// Decide, and also return every move score considered along the way.
    pub fn decide_with_scores(&self, snapshot: &BattleSnapshot) -> (PlayerAction, Vec<ScoredMove>) {
        let (best, scores) = self.scorer.best_move(snapshot);

        if let Some(best) = best {
            if let Some(move_) = snapshot.available_moves.get(best.index) {
                self.scorer.record_choice(snapshot, move_);
            }
            info!(
                "[{}] turn {}: using {} ({}, score {:.1})",
                snapshot.battle_id, snapshot.turn, best.move_id, best.kind, best.score
            );
            return (
                PlayerAction::UseMove {
                    move_id: best.move_id,
                },
                scores,
            );
        }

        let action = switch_or_fallback(snapshot, self.fallback.as_ref());
        info!(
            "[{}] turn {}: no move available, {}",
            snapshot.battle_id, snapshot.turn, action
        );
        (action, scores)
    }
}

impl<O: DamageOracle> Behavior for HeuristicAgent<O> {
    fn decide_action(&self, snapshot: &BattleSnapshot) -> PlayerAction {
        self.decide_with_scores(snapshot).0
    }
}

/// Always attacks with the highest base power move it has.
pub struct StrongestMoveAgent {
    fallback: Box<dyn FallbackPolicy>,
}

impl Default for StrongestMoveAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl StrongestMoveAgent {
    pub fn new() -> Self {
        Self {
            fallback: Box::new(RandomFallback),
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn FallbackPolicy>) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Behavior for StrongestMoveAgent {
    fn decide_action(&self, snapshot: &BattleSnapshot) -> PlayerAction {
        let strongest = snapshot
            .available_moves
            .iter()
            .reduce(|best, candidate| {
                if candidate.base_power > best.base_power {
                    candidate
                } else {
                    best
                }
            });

        match strongest {
            Some(move_) => PlayerAction::UseMove {
                move_id: move_.move_id(),
            },
            None => switch_or_fallback(snapshot, self.fallback.as_ref()),
        }
    }
}

/// Picks uniformly among the legal actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAgent;

impl Behavior for RandomAgent {
    fn decide_action(&self, snapshot: &BattleSnapshot) -> PlayerAction {
        RandomFallback.fallback(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::BattleMove;
    use crate::scoring::config::ScoringConfig;
    use crate::scoring::tests::common::{create_test_snapshot, MockOracle, TestPokemonBuilder};
    use pretty_assertions::assert_eq;
    use schema::{MoveCategory, PokemonType, StatType};

    /// Always answers `Default`, so tests can tell the fallback was reached.
    struct PassFallback;

    impl FallbackPolicy for PassFallback {
        fn fallback(&self, _snapshot: &BattleSnapshot) -> PlayerAction {
            PlayerAction::Default
        }
    }

    fn agent_with_rolls(rolls: Vec<u16>) -> HeuristicAgent<MockOracle> {
        HeuristicAgent::new(MoveScorer::new(MockOracle::with_rolls(rolls), ScoringConfig::default()))
            .with_fallback(Box::new(PassFallback))
    }

    fn standard_snapshot() -> BattleSnapshot {
        let ours = TestPokemonBuilder::new("Starmie", vec![PokemonType::Water]).build();
        let theirs = TestPokemonBuilder::new("Arcanine", vec![PokemonType::Fire]).build();
        create_test_snapshot("battle-agent", ours, theirs)
    }

    #[test]
    fn test_heuristic_agent_picks_a_legal_move() {
        // Arrange
        let mut snapshot = standard_snapshot();
        snapshot.available_moves = vec![
            BattleMove::new("Splash", PokemonType::Normal, MoveCategory::Status, 0),
            BattleMove::new("Surf", PokemonType::Water, MoveCategory::Special, 90),
        ];
        let agent = agent_with_rolls(vec![80, 85, 90]);

        // Act
        let (action, scores) = agent.decide_with_scores(&snapshot);

        // Assert
        assert_eq!(action, PlayerAction::UseMove { move_id: "surf".to_string() });
        assert_eq!(scores.len(), 2);
        assert!(snapshot.legal_actions().contains(&action));
    }

    #[test]
    fn test_heuristic_agent_records_chosen_debuff() {
        let mut snapshot = standard_snapshot();
        let mut screech = BattleMove::new("Screech", PokemonType::Normal, MoveCategory::Status, 0);
        screech.boosts.insert(StatType::Def, -2);
        // Only a physical attack makes a defense drop worth anything.
        let tackle = BattleMove::new("Tackle", PokemonType::Normal, MoveCategory::Physical, 40);
        snapshot.available_moves = vec![screech, tackle];
        let agent = agent_with_rolls(vec![10]);

        let action = agent.decide_action(&snapshot);

        assert_eq!(action, PlayerAction::UseMove { move_id: "screech".to_string() });
        assert_eq!(
            agent.scorer().memory().debuff_applications("battle-agent", StatType::Def),
            1
        );
    }

    #[test]
    fn test_switches_to_healthiest_when_no_moves() {
        let mut snapshot = standard_snapshot();
        snapshot.available_switches = vec![
            TestPokemonBuilder::new("Snorlax", vec![PokemonType::Normal]).with_hp(0.4).build(),
            TestPokemonBuilder::new("Gengar", vec![PokemonType::Ghost]).with_hp(0.9).build(),
            TestPokemonBuilder::new("Alakazam", vec![PokemonType::Psychic]).with_hp(0.9).build(),
            TestPokemonBuilder::new("Rhydon", vec![PokemonType::Ground]).fainted().build(),
        ];
        let agent = agent_with_rolls(vec![10]);

        let action = agent.decide_action(&snapshot);

        assert_eq!(action, PlayerAction::SwitchPokemon { ident: "Gengar".to_string() });
    }

    #[test]
    fn test_never_switches_to_the_active_pokemon() {
        let mut snapshot = standard_snapshot();
        snapshot.available_switches =
            vec![TestPokemonBuilder::new("Starmie", vec![PokemonType::Water]).build()];

        let action = agent_with_rolls(vec![10]).decide_action(&snapshot);

        assert_eq!(action, PlayerAction::Default);
    }

    #[test]
    fn test_random_fallback_never_switches_to_the_active_pokemon() {
        let mut snapshot = standard_snapshot();
        snapshot.available_switches =
            vec![TestPokemonBuilder::new("Starmie", vec![PokemonType::Water]).build()];
        let agent = HeuristicAgent::new(MoveScorer::new(
            MockOracle::with_rolls(vec![10]),
            ScoringConfig::default(),
        ));

        for _ in 0..20 {
            assert_eq!(agent.decide_action(&snapshot), PlayerAction::Default);
        }
    }

    #[test]
    fn test_item_swap_keeps_value_until_chosen() {
        // Arrange
        let mut snapshot = standard_snapshot();
        snapshot.available_moves = vec![
            BattleMove::new("Trick", PokemonType::Psychic, MoveCategory::Status, 0),
            BattleMove::new("Surf", PokemonType::Water, MoveCategory::Special, 90),
        ];
        let strong_attack = agent_with_rolls(vec![400]);
        let weak_attack = agent_with_rolls(vec![100]);

        // Act
        let outscored = strong_attack.decide_action(&snapshot);
        let chosen = weak_attack.decide_action(&snapshot);
        snapshot.turn = 2;

        // Assert
        assert_eq!(outscored, PlayerAction::UseMove { move_id: "surf".to_string() });
        assert_eq!(strong_attack.scorer().score_move(&snapshot, &snapshot.available_moves[0]), 280.0);

        assert_eq!(chosen, PlayerAction::UseMove { move_id: "trick".to_string() });
        assert_eq!(weak_attack.scorer().score_move(&snapshot, &snapshot.available_moves[0]), 0.0);
        assert_eq!(weak_attack.decide_action(&snapshot), PlayerAction::UseMove { move_id: "surf".to_string() });
    }

    #[test]
    fn test_falls_back_when_nothing_is_legal() {
        let snapshot = standard_snapshot();
        let (action, scores) = agent_with_rolls(vec![10]).decide_with_scores(&snapshot);
        assert_eq!(action, PlayerAction::Default);
        assert!(scores.is_empty());

        assert_eq!(RandomFallback.fallback(&snapshot), PlayerAction::Default);
    }

    #[test]
    fn test_strongest_move_agent_prefers_base_power() {
        let mut snapshot = standard_snapshot();
        snapshot.available_moves = vec![
            BattleMove::new("Surf", PokemonType::Water, MoveCategory::Special, 90),
            BattleMove::new("Hydro Pump", PokemonType::Water, MoveCategory::Special, 110),
            BattleMove::new("Hydro Cannon", PokemonType::Water, MoveCategory::Special, 110),
        ];

        let action = StrongestMoveAgent::new().decide_action(&snapshot);

        assert_eq!(action, PlayerAction::UseMove { move_id: "hydropump".to_string() });
    }

    #[test]
    fn test_random_agent_only_returns_legal_actions() {
        let mut snapshot = standard_snapshot();
        snapshot.available_moves = vec![
            BattleMove::new("Surf", PokemonType::Water, MoveCategory::Special, 90),
            BattleMove::new("Recover", PokemonType::Normal, MoveCategory::Status, 0),
        ];
        snapshot.available_switches =
            vec![TestPokemonBuilder::new("Lapras", vec![PokemonType::Water, PokemonType::Ice]).build()];
        let legal = snapshot.legal_actions();

        for _ in 0..50 {
            assert!(legal.contains(&RandomAgent.decide_action(&snapshot)));
        }
    }
}
