use crate::errors::{SnapshotError, SnapshotResult};
use crate::moves::BattleMove;
use crate::player::PlayerAction;
use crate::pokemon::Pokemon;
use schema::{MoveCategory, SideCondition};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Read-only view of one battle at a decision point, as reported by the battle client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleSnapshot {
    pub battle_id: String,
    #[serde(default)]
    pub turn: u32,
    #[serde(default)]
    pub active: Option<Pokemon>,
    #[serde(default)]
    pub opponent_active: Option<Pokemon>,
    // Own roster in slot order, active Pokemon included.
    #[serde(default)]
    pub team: Vec<Pokemon>,
    // Opponent Pokemon revealed so far.
    #[serde(default)]
    pub opponent_team: Vec<Pokemon>,
    // Full opponent roster size when known; unrevealed members count as healthy.
    #[serde(default)]
    pub opponent_team_size: Option<usize>,
    #[serde(default)]
    pub side_conditions: HashSet<SideCondition>,
    #[serde(default)]
    pub opponent_side_conditions: HashSet<SideCondition>,
    #[serde(default)]
    pub available_moves: Vec<BattleMove>,
    #[serde(default)]
    pub available_switches: Vec<Pokemon>,
}

impl BattleSnapshot {
    pub fn new(battle_id: impl Into<String>) -> Self {
        Self {
            battle_id: battle_id.into(),
            turn: 1,
            active: None,
            opponent_active: None,
            team: Vec::new(),
            opponent_team: Vec::new(),
            opponent_team_size: None,
            side_conditions: HashSet::new(),
            opponent_side_conditions: HashSet::new(),
            available_moves: Vec::new(),
            available_switches: Vec::new(),
        }
    }

    /// Parse a snapshot from JSON and restore its invariants.
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        let mut snapshot: BattleSnapshot =
            serde_json::from_str(json).map_err(|e| SnapshotError::Parse(e.to_string()))?;
        snapshot.sanitize();
        Ok(snapshot)
    }

    pub fn load(path: &Path) -> SnapshotResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| SnapshotError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Clamp boosts and HP on every Pokemon in the snapshot.
    pub fn sanitize(&mut self) {
        let pokemon = self
            .active
            .iter_mut()
            .chain(self.opponent_active.iter_mut())
            .chain(self.team.iter_mut())
            .chain(self.opponent_team.iter_mut())
            .chain(self.available_switches.iter_mut());
        for p in pokemon {
            p.sanitize();
        }
        for mv in &mut self.available_moves {
            mv.accuracy = mv.accuracy.clamp(0.0, 1.0);
        }
    }

    /// Non-fainted Pokemon on our side, the active one included.
    pub fn remaining_pokemon(&self) -> usize {
        if self.team.is_empty() {
            return self.active.iter().filter(|p| !p.is_fainted()).count();
        }
        self.team.iter().filter(|p| !p.is_fainted()).count()
    }

    /// Non-fainted opponent Pokemon, counting unrevealed slots as healthy.
    pub fn opponent_remaining_pokemon(&self) -> usize {
        let revealed = self.opponent_team.len();
        let alive = self.opponent_team.iter().filter(|p| !p.is_fainted()).count();
        let unrevealed = self
            .opponent_team_size
            .map_or(0, |size| size.saturating_sub(revealed));
        if revealed == 0 && unrevealed == 0 {
            return self
                .opponent_active
                .iter()
                .filter(|p| !p.is_fainted())
                .count();
        }
        alive + unrevealed
    }

    /// Switch targets that are neither fainted nor already active, in listed order.
    pub fn legal_switches(&self) -> impl Iterator<Item = &Pokemon> + '_ {
        let active_ident = self.active.as_ref().map(|p| p.ident.as_str());
        self.available_switches
            .iter()
            .filter(move |p| !p.is_fainted() && Some(p.ident.as_str()) != active_ident)
    }

    /// True if any legal move is a damaging move of the given category.
    pub fn has_attack_of(&self, category: MoveCategory) -> bool {
        self.available_moves
            .iter()
            .any(|mv| mv.category == category && mv.base_power > 0)
    }

    /// Every action the client currently allows, moves first.
    /// Switches skip fainted Pokemon and the one already active.
    pub fn legal_actions(&self) -> Vec<PlayerAction> {
        let moves = self.available_moves.iter().map(|mv| PlayerAction::UseMove {
            move_id: mv.move_id(),
        });
        let switches = self
            .legal_switches()
            .map(|p| PlayerAction::SwitchPokemon {
                ident: p.ident.clone(),
            });
        moves.chain(switches).collect()
    }
}
