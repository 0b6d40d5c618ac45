//! Legal-move model and the ordered classification table used for scoring dispatch.

use phf::phf_set;
use schema::{MoveCategory, PokemonType, SideCondition, StatType, StatusType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

static ITEM_SWAP_MOVES: phf::Set<&'static str> = phf_set! {
    "trick",
    "switcheroo",
};

static HAZARD_REMOVAL_MOVES: phf::Set<&'static str> = phf_set! {
    "rapidspin",
    "defog",
    "tidyup",
    "mortalspin",
    "courtchange",
};

static PIVOT_MOVES: phf::Set<&'static str> = phf_set! {
    "uturn",
    "voltswitch",
    "flipturn",
};

/// Normalizes a display name into a simulator id ("U-turn" -> "uturn").
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn default_accuracy() -> f32 {
    1.0
}

/// A legal move as exposed by the battle client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleMove {
    pub id: String,
    #[serde(rename = "type")]
    pub move_type: PokemonType,
    pub category: MoveCategory,
    #[serde(default)]
    pub base_power: u16,
    // 1.0 for moves that never miss.
    #[serde(default = "default_accuracy")]
    pub accuracy: f32,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub side_condition: Option<SideCondition>,
    #[serde(default)]
    pub self_boosts: BTreeMap<StatType, i8>,
    #[serde(default)]
    pub status: Option<StatusType>,
    #[serde(default)]
    pub is_protect: bool,
    // Stage changes applied to the opponent.
    #[serde(default)]
    pub boosts: BTreeMap<StatType, i8>,
}

/// Moves the scorer recognizes by identifier rather than by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UtilityKind {
    ItemSwap,
    HazardRemoval,
    Pivot,
    Unclassified,
}

impl UtilityKind {
    pub fn for_move_id(move_id: &str) -> Option<UtilityKind> {
        let move_id = to_id(move_id);
        if ITEM_SWAP_MOVES.contains(move_id.as_str()) {
            Some(UtilityKind::ItemSwap)
        } else if HAZARD_REMOVAL_MOVES.contains(move_id.as_str()) {
            Some(UtilityKind::HazardRemoval)
        } else if PIVOT_MOVES.contains(move_id.as_str()) {
            Some(UtilityKind::Pivot)
        } else {
            None
        }
    }
}

/// The evaluator a move is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Hazard(SideCondition),
    Setup,
    Status(StatusType),
    Protect,
    Debuff,
    Utility(UtilityKind),
    Damage,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Hazard(condition) => write!(f, "hazard ({})", condition),
            MoveKind::Setup => write!(f, "setup"),
            MoveKind::Status(status) => write!(f, "status ({})", status),
            MoveKind::Protect => write!(f, "protect"),
            MoveKind::Debuff => write!(f, "debuff"),
            MoveKind::Utility(kind) => write!(f, "utility ({:?})", kind),
            MoveKind::Damage => write!(f, "damage"),
        }
    }
}

type Classifier = fn(&BattleMove) -> Option<MoveKind>;

// Evaluated in order; the first classifier that matches decides the kind.
const CLASSIFIERS: [Classifier; 8] = [
    |m| {
        m.side_condition
            .filter(|condition| condition.is_hazard())
            .map(MoveKind::Hazard)
    },
    |m| m.raises_own_stats().then_some(MoveKind::Setup),
    |m| m.status.map(MoveKind::Status),
    |m| m.is_protect.then_some(MoveKind::Protect),
    |m| m.boosts.values().any(|&d| d != 0).then_some(MoveKind::Debuff),
    |m| UtilityKind::for_move_id(&m.id).map(MoveKind::Utility),
    |m| m.is_damaging().then_some(MoveKind::Damage),
    |_| Some(MoveKind::Utility(UtilityKind::Unclassified)),
];

impl BattleMove {
    /// Create a move with no secondary shape (no boosts, status or hazard).
    pub fn new(
        id: impl Into<String>,
        move_type: PokemonType,
        category: MoveCategory,
        base_power: u16,
    ) -> Self {
        BattleMove {
            id: id.into(),
            move_type,
            category,
            base_power,
            accuracy: default_accuracy(),
            priority: 0,
            side_condition: None,
            self_boosts: BTreeMap::new(),
            status: None,
            is_protect: false,
            boosts: BTreeMap::new(),
        }
    }

    pub fn move_id(&self) -> String {
        to_id(&self.id)
    }

    pub fn is_damaging(&self) -> bool {
        self.category.is_damaging()
    }

    pub fn raises_own_stats(&self) -> bool {
        self.self_boosts.values().any(|&delta| delta > 0)
    }

    pub fn lowers_own_stats(&self) -> bool {
        self.self_boosts.values().any(|&delta| delta < 0)
    }

    pub fn kind(&self) -> MoveKind {
        CLASSIFIERS
            .iter()
            .find_map(|classify| classify(self))
            .unwrap_or(MoveKind::Utility(UtilityKind::Unclassified))
    }
}
