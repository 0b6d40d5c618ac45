// In: src/lib.rs

//! Pokemon Heuristic Battle Agent
//!
//! Scores every legal move in a battle snapshot with a table of category-specific
//! heuristics and picks the best one. The battle client and the damage calculator
//! live outside this crate; they are reached through `BattleSnapshot` and the
//! `DamageOracle` trait.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod errors;
pub mod moves;
pub mod player;
pub mod pokemon;
pub mod scoring;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, MoveCategory, PokemonType, SideCondition, StatType, StatusType};

// --- From this crate's modules (`src/`) ---

// Snapshot model and the damage-oracle seam.
pub use battle::calculators::{DamageOracle, FormulaOracle};
pub use battle::state::BattleSnapshot;
pub use moves::{BattleMove, MoveKind, UtilityKind};
pub use player::PlayerAction;
pub use pokemon::{Pokemon, StatStages};

// Agents and the scorer behind them.
pub use battle::ai::{
    Behavior, FallbackPolicy, HeuristicAgent, RandomAgent, RandomFallback, StrongestMoveAgent,
};
pub use scoring::config::{ScoringConfig, ScoringPolicy};
pub use scoring::memory::BattleMemory;
pub use scoring::{MoveScorer, ScoredMove, ScoringContext};

// Crate-specific error and result types.
pub use errors::{
    AgentError, AgentResult, ConfigError, ConfigResult, OracleError, OracleResult, SnapshotError,
    SnapshotResult,
};
