use crate::moves::to_id;
use schema::{BaseStats, PokemonType, StatType, StatusType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MAX_STAT_STAGE: i8 = 6;
pub const MIN_STAT_STAGE: i8 = -6;

/// Stat stage modifications for one Pokemon, each kept within -6..=+6.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatStages {
    stages: HashMap<StatType, i8>,
}

impl StatStages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current stage for a stat type (0 if not set)
    pub fn get(&self, stat: StatType) -> i8 {
        self.stages
            .get(&stat)
            .copied()
            .unwrap_or(0)
            .clamp(MIN_STAT_STAGE, MAX_STAT_STAGE)
    }

    /// Set the stage for a stat type (clamped to -6 to +6)
    pub fn set(&mut self, stat: StatType, stage: i8) {
        let clamped_stage = stage.clamp(MIN_STAT_STAGE, MAX_STAT_STAGE);
        if clamped_stage == 0 {
            self.stages.remove(&stat);
        } else {
            self.stages.insert(stat, clamped_stage);
        }
    }

    /// Re-applies the clamp to every entry, e.g. after deserializing untrusted input.
    pub fn normalize(&mut self) {
        let entries: Vec<(StatType, i8)> = self.stages.iter().map(|(s, v)| (*s, *v)).collect();
        for (stat, stage) in entries {
            self.set(stat, stage);
        }
    }
}

fn default_level() -> u8 {
    100
}

/// A read-only view of one Pokemon as observed by the battle client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub ident: String,
    #[serde(default = "default_level")]
    pub level: u8,
    pub hp_fraction: f32,
    #[serde(default)]
    pub max_hp: u16,
    #[serde(default)]
    pub fainted: bool,
    #[serde(default)]
    pub ability: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub base_stats: BaseStats,
    #[serde(default)]
    pub boosts: StatStages,
    #[serde(default)]
    pub status: Option<StatusType>,
    // Consecutive turns this Pokemon has used a protection move.
    #[serde(default)]
    pub protect_counter: u8,
}

impl Pokemon {
    /// Create a healthy level 100 Pokemon with no boosts, status or ability.
    pub fn new(ident: impl Into<String>, types: Vec<PokemonType>, base_stats: BaseStats) -> Self {
        Pokemon {
            ident: ident.into(),
            level: default_level(),
            hp_fraction: 1.0,
            max_hp: 0,
            fainted: false,
            ability: None,
            item: None,
            types,
            base_stats,
            boosts: StatStages::new(),
            status: None,
            protect_counter: 0,
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.fainted || self.hp_fraction <= 0.0
    }

    /// Current HP as a fraction of max, 0.0 when fainted.
    pub fn current_hp_fraction(&self) -> f32 {
        if self.is_fainted() {
            0.0
        } else {
            self.hp_fraction.clamp(0.0, 1.0)
        }
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    pub fn ability_id(&self) -> Option<String> {
        self.ability.as_deref().map(to_id)
    }

    pub fn stat_stage(&self, stat: StatType) -> i8 {
        self.boosts.get(stat)
    }

    /// Restores the invariants the client is expected to uphold.
    pub fn sanitize(&mut self) {
        self.boosts.normalize();
        if self.fainted || !self.hp_fraction.is_finite() {
            self.hp_fraction = 0.0;
        }
        self.hp_fraction = self.hp_fraction.clamp(0.0, 1.0);
        if self.hp_fraction == 0.0 {
            self.fainted = true;
        }
        self.types.truncate(2);
    }
}
