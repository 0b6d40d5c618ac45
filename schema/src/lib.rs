// Heuristic agent schema - Shared type definitions
// This crate holds the static enums and plain data shared by the scorer,
// the damage oracle and the snapshot loader.

// Re-export the main types
pub use battle_data::*;
pub use move_types::*;
pub use pokemon_types::*;

pub mod battle_data;
pub mod move_types;
pub mod pokemon_types;
