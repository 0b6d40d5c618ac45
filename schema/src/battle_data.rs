use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumString;

/// A persistent effect attached to one side of the field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Copy, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SideCondition {
    StealthRock,
    Spikes,
    ToxicSpikes,
    StickyWeb,
    Reflect,
    LightScreen,
    AuroraVeil,
    Tailwind,
    Safeguard,
    Mist,
}

impl SideCondition {
    /// Entry hazards damage or hinder Pokemon switching in on the affected side.
    pub fn is_hazard(self) -> bool {
        matches!(
            self,
            SideCondition::StealthRock
                | SideCondition::Spikes
                | SideCondition::ToxicSpikes
                | SideCondition::StickyWeb
        )
    }
}

impl fmt::Display for SideCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            SideCondition::StealthRock => "Stealth Rock",
            SideCondition::Spikes => "Spikes",
            SideCondition::ToxicSpikes => "Toxic Spikes",
            SideCondition::StickyWeb => "Sticky Web",
            SideCondition::Reflect => "Reflect",
            SideCondition::LightScreen => "Light Screen",
            SideCondition::AuroraVeil => "Aurora Veil",
            SideCondition::Tailwind => "Tailwind",
            SideCondition::Safeguard => "Safeguard",
            SideCondition::Mist => "Mist",
        };

        write!(f, "{}", display_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_condition_parses_simulator_ids() {
        assert_eq!("stealthrock".parse::<SideCondition>(), Ok(SideCondition::StealthRock));
        assert_eq!("StickyWeb".parse::<SideCondition>(), Ok(SideCondition::StickyWeb));
        assert!(SideCondition::Spikes.is_hazard());
        assert!(!SideCondition::Reflect.is_hazard());
    }
}
