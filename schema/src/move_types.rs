use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    pub fn is_damaging(self) -> bool {
        matches!(self, MoveCategory::Physical | MoveCategory::Special)
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

/// Boostable stats, keyed the way the simulator reports them (`atk`, `spa`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatType {
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
    Accuracy,
    Evasion,
}

impl StatType {
    /// The category of attack that benefits when the opponent loses this stat.
    pub fn exploited_by(self) -> Option<MoveCategory> {
        match self {
            StatType::Def => Some(MoveCategory::Physical),
            StatType::SpD => Some(MoveCategory::Special),
            _ => None,
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatType::Atk => write!(f, "Attack"),
            StatType::Def => write!(f, "Defense"),
            StatType::SpA => write!(f, "Special Attack"),
            StatType::SpD => write!(f, "Special Defense"),
            StatType::Spe => write!(f, "Speed"),
            StatType::Accuracy => write!(f, "Accuracy"),
            StatType::Evasion => write!(f, "Evasion"),
        }
    }
}

/// Major (non-volatile) status conditions. Only one can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
pub enum StatusType {
    #[serde(rename = "psn")]
    #[strum(serialize = "psn")]
    Poison,
    #[serde(rename = "tox")]
    #[strum(serialize = "tox")]
    Toxic,
    #[serde(rename = "brn")]
    #[strum(serialize = "brn")]
    Burn,
    #[serde(rename = "par")]
    #[strum(serialize = "par")]
    Paralysis,
    #[serde(rename = "slp")]
    #[strum(serialize = "slp")]
    Sleep,
    #[serde(rename = "frz")]
    #[strum(serialize = "frz")]
    Freeze,
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
