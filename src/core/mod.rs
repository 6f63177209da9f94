//! Core engine types: seats, player state, actions, RNG, configuration, logging.

pub mod action;
pub mod config;
pub mod logger;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::EngineConfig;
pub use logger::{GameLogger, LogEntry, OutputMode, Verbosity, DEFAULT_LOG_CAPACITY};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::PlayerState;
