//! Error types for the match engine.
//!
//! Every failure a caller can trigger through the state machine is a typed,
//! recoverable `EngineError`. Winning is not an error: `Match::play_card`
//! reports it as `PlayOutcome::Won`.

use thiserror::Error;

use crate::rules::IllegalPlay;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Not your turn! Current player: {current}")]
    WrongTurn { player: String, current: String },

    #[error("Card {card} not found in {player}'s hand")]
    CardNotInHand { player: String, card: String },

    #[error("{player} cannot play {card}: {reason}")]
    IllegalPlay {
        player: String,
        card: String,
        reason: IllegalPlay,
    },

    #[error("No opponent found for {0}")]
    NoOpponent(String),

    #[error("Match has not been started")]
    NotStarted,

    #[error("Match is over, {winner} has won")]
    MatchOver { winner: String },

    #[error("Malformed card catalog: {0}")]
    MalformedCatalog(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EngineError {
    /// True when a play was rejected because the player could not pay for it.
    ///
    /// Transports use this to show an energy-specific message.
    #[must_use]
    pub fn is_energy_shortage(&self) -> bool {
        matches!(
            self,
            EngineError::IllegalPlay {
                reason: IllegalPlay::InsufficientEnergy { .. },
                ..
            }
        )
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
