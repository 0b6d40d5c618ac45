use serde::{Deserialize, Serialize};
use std::fmt;

/// The decision emitted for one turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    // The id refers to one of the snapshot's available moves.
    UseMove { move_id: String },

    // The ident refers to one of the snapshot's available switches.
    SwitchPokemon { ident: String },

    // Nothing legal was offered; the server picks on our behalf.
    Default,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::UseMove { move_id } => write!(f, "move {}", move_id),
            PlayerAction::SwitchPokemon { ident } => write!(f, "switch {}", ident),
            PlayerAction::Default => write!(f, "default"),
        }
    }
}
