//! Match actions and the history record.
//!
//! Every successful state-machine mutation is recorded as an `ActionRecord`
//! so a match can be audited or replayed against a same-seed match.

use serde::{Deserialize, Serialize};

/// A state-machine operation that succeeded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Match dealt and started with these players.
    Start { players: Vec<String> },
    PlayCard { player: String, card: String },
    EndTurn { player: String },
    NewRound,
}

/// A recorded action with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position in the whole match history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            action,
            turn,
            sequence,
        }
    }
}
