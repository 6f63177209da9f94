//! The match: turn state machine and its public snapshots.
//!
//! - `Match`: Owns players, deck, turn pointer, goal and history
//! - `PlayOutcome`: What a successful play led to
//! - `MatchSnapshot` / `PlayerSnapshot`: Serializable frozen views

pub mod machine;
pub mod snapshot;

pub use machine::{Match, PlayOutcome, TurnAdvance};
pub use snapshot::{MatchPhase, MatchSnapshot, PlayerSnapshot};
