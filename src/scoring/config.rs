//! Tunable constants for the move scorer.
//!
//! Every number here is a heuristic tuning value rather than a game mechanic, so
//! the whole table can be replaced from a RON file.

use crate::errors::{ConfigError, ConfigResult};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the setup, hazard and status evaluators size their scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringPolicy {
    /// Flat configured values.
    #[default]
    Fixed,
    /// Values estimated from damage, remaining Pokemon and remaining turns.
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub policy: ScoringPolicy,

    // Setup gating and sizing
    pub setup_min_hp: f32,
    pub setup_min_matchup: f32,
    pub setup_value: f32,
    pub setup_drawback_factor: f32,
    pub boost_damage_gain: f32,
    pub setup_expected_attacks: f32,
    pub setup_min_value: f32,

    // Entry hazards
    pub hazard_value: f32,
    pub hazard_min_opponents: usize,
    pub switches_per_pokemon: f32,
    pub hazard_damage_per_switch: f32,

    // Status infliction
    pub status_high_accuracy: f32,
    pub status_low_accuracy: f32,
    pub status_high_value: f32,
    pub status_reduced_value: f32,
    pub status_reduced_factor: f32,
    pub status_chip_fraction: f32,

    // Protection
    pub protect_synergy_value: f32,
    pub protect_scouting_value: f32,
    pub protect_max_consecutive: u8,

    // Opponent stat drops
    pub debuff_value: f32,
    pub debuff_repeat_fraction: f32,
    pub debuff_floor_stage: i8,

    // Utility moves
    pub item_swap_per_turn: f32,
    pub hazard_removal_per_pokemon: f32,
    pub hazard_removal_min_team: usize,
    pub unclassified_value: f32,

    // Battle length estimate
    pub expected_battle_turns: u32,
    pub min_remaining_turns: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::Fixed,

            setup_min_hp: 0.8,
            setup_min_matchup: 0.0,
            setup_value: 500.0,
            setup_drawback_factor: 0.5,
            boost_damage_gain: 0.5,
            setup_expected_attacks: 3.0,
            setup_min_value: 10.0,

            hazard_value: 300.0,
            hazard_min_opponents: 3,
            switches_per_pokemon: 1.5,
            hazard_damage_per_switch: 25.0,

            status_high_accuracy: 0.85,
            status_low_accuracy: 0.7,
            status_high_value: 250.0,
            status_reduced_value: 150.0,
            status_reduced_factor: 0.6,
            status_chip_fraction: 1.0 / 16.0,

            protect_synergy_value: 200.0,
            protect_scouting_value: 50.0,
            protect_max_consecutive: 2,

            debuff_value: 120.0,
            debuff_repeat_fraction: 0.2,
            debuff_floor_stage: -4,

            item_swap_per_turn: 10.0,
            hazard_removal_per_pokemon: 40.0,
            hazard_removal_min_team: 2,
            unclassified_value: 1.0,

            expected_battle_turns: 30,
            min_remaining_turns: 3,
        }
    }
}

fn check(condition: bool, message: &str) -> ConfigResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid(message.to_string()))
    }
}

impl ScoringConfig {
    /// Parse a configuration from RON text and validate it.
    /// Fields missing from the text keep their default values.
    pub fn from_ron(text: &str) -> ConfigResult<Self> {
        let config: ScoringConfig =
            ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_ron(&text)
    }

    pub fn to_ron(&self) -> ConfigResult<String> {
        ron::ser::to_string_pretty(self, PrettyConfig::default())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        check(
            (0.0..=1.0).contains(&self.setup_min_hp),
            "setup_min_hp must be within 0.0..=1.0",
        )?;
        check(
            (0.0..=1.0).contains(&self.status_low_accuracy)
                && (0.0..=1.0).contains(&self.status_high_accuracy)
                && self.status_low_accuracy <= self.status_high_accuracy,
            "status accuracy thresholds must satisfy 0 <= low <= high <= 1",
        )?;
        check(
            (0.0..=1.0).contains(&self.debuff_repeat_fraction),
            "debuff_repeat_fraction must be within 0.0..=1.0",
        )?;
        check(
            (0.0..=1.0).contains(&self.setup_drawback_factor)
                && (0.0..=1.0).contains(&self.status_reduced_factor),
            "scaling factors must be within 0.0..=1.0",
        )?;
        check(
            (-6..=0).contains(&self.debuff_floor_stage),
            "debuff_floor_stage must be within -6..=0",
        )?;
        check(
            self.protect_max_consecutive >= 1,
            "protect_max_consecutive must be at least 1",
        )?;
        let values = [
            self.setup_value,
            self.setup_min_value,
            self.boost_damage_gain,
            self.setup_expected_attacks,
            self.hazard_value,
            self.switches_per_pokemon,
            self.hazard_damage_per_switch,
            self.status_high_value,
            self.status_reduced_value,
            self.status_chip_fraction,
            self.protect_synergy_value,
            self.protect_scouting_value,
            self.debuff_value,
            self.item_swap_per_turn,
            self.hazard_removal_per_pokemon,
            self.unclassified_value,
        ];
        check(
            values.iter().all(|v| v.is_finite() && *v >= 0.0),
            "score values must be finite and non-negative",
        )?;
        check(
            self.status_reduced_value <= self.status_high_value,
            "status_reduced_value must not exceed status_high_value",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ScoringConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_ron_round_trip_keeps_values() {
        let mut config = ScoringConfig::default();
        config.policy = ScoringPolicy::Dynamic;
        config.hazard_damage_per_switch = 30.0;

        let text = config.to_ron().unwrap();
        assert_eq!(ScoringConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = ScoringConfig::from_ron("(policy: Dynamic, setup_value: 420.0)").unwrap();
        assert_eq!(config.policy, ScoringPolicy::Dynamic);
        assert_eq!(config.setup_value, 420.0);
        assert_eq!(config.hazard_value, ScoringConfig::default().hazard_value);
    }

    #[test]
    fn test_rejects_inverted_accuracy_thresholds() {
        let err = ScoringConfig::from_ron("(status_low_accuracy: 0.9, status_high_accuracy: 0.8)")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_text() {
        let err = ScoringConfig::from_ron("(policy: Sometimes").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
