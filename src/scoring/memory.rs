use crate::moves::UtilityKind;
use schema::StatType;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What the scorer remembers about a single battle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct BattleRecord {
    one_shot_used: HashSet<UtilityKind>,
    debuff_applications: HashMap<StatType, u32>,
}

impl BattleRecord {
    fn one_shot_used(&self, kind: UtilityKind) -> bool {
        self.one_shot_used.contains(&kind)
    }

    fn debuff_applications(&self, stat: StatType) -> u32 {
        self.debuff_applications.get(&stat).copied().unwrap_or(0)
    }
}

/// Per-battle state owned by the scorer, keyed by battle id.
///
/// Records are created on first access and live as long as the scorer. Battle ids
/// are unique per match, so records for concurrent battles never alias.
#[derive(Debug, Default)]
pub struct BattleMemory {
    records: Mutex<HashMap<String, BattleRecord>>,
}

impl BattleMemory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, BattleRecord>> {
        // A panic in another battle's decision leaves the map itself consistent.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_record<R>(&self, battle_id: &str, f: impl FnOnce(&mut BattleRecord) -> R) -> R {
        let mut records = self.lock();
        let record = records.entry(battle_id.to_string()).or_default();
        f(record)
    }

    /// Marks a one-shot move family as used in this battle.
    /// Returns true only for the first claim.
    pub fn claim_one_shot(&self, battle_id: &str, kind: UtilityKind) -> bool {
        self.with_record(battle_id, |record| record.one_shot_used.insert(kind))
    }

    pub fn is_one_shot_used(&self, battle_id: &str, kind: UtilityKind) -> bool {
        self.lock()
            .get(battle_id)
            .is_some_and(|record| record.one_shot_used(kind))
    }

    pub fn record_debuff(&self, battle_id: &str, stat: StatType) {
        self.with_record(battle_id, |record| {
            *record.debuff_applications.entry(stat).or_insert(0) += 1;
        });
    }

    pub fn debuff_applications(&self, battle_id: &str, stat: StatType) -> u32 {
        self.lock()
            .get(battle_id)
            .map_or(0, |record| record.debuff_applications(stat))
    }

    pub fn tracked_battles(&self) -> usize {
        self.lock().len()
    }
}
