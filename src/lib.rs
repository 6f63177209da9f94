//! # codeclash
//!
//! A two-player, turn-based programming card game engine.
//!
//! Players alternately spend energy to play cards from hand. Cards apply
//! effects (damage, healing, energy gain, card draw) to the acting player or
//! the opponent. The engine enforces turn ownership and play legality,
//! resolves effects deterministically and detects wins.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: Every rejected operation returns a typed
//!    `EngineError` and leaves the match untouched.
//!
//! 2. **Cards by handle**: Templates live once in a shared `CardCatalog`;
//!    piles hold `CardHandle`s and match cards by name.
//!
//! 3. **Pluggable policies**: Victory (`WinRule`) and goal evaluation
//!    (`GoalCheck`) are chosen per match without touching the state machine.
//!
//! 4. **Deterministic**: A seeded ChaCha RNG drives shuffles and goals, so a
//!    recorded history replays to the same state.
//!
//! ## Modules
//!
//! - `core`: Seats, player state, actions, RNG, configuration, logging
//! - `cards`: Card templates, handles, the catalog and the standard set
//! - `zones`: The shared deck and per-player piles
//! - `effects`: Effect definitions and the resolver
//! - `rules`: Legality, win rules, goals and combinations
//! - `game`: The match state machine and snapshots
//! - `error`: `EngineError` and `Result`

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineConfig, GameLogger, GameRng, GameRngState, LogEntry, OutputMode,
    PlayerId, PlayerMap, PlayerState, Verbosity,
};

pub use crate::cards::{CardCatalog, CardHandle, CardKind, CardTemplate};

pub use crate::zones::{Deck, Pile};

pub use crate::effects::{
    Effect, EffectKind, EffectResolver, EffectTarget, ResolveResult, Resolution, ResolverContext,
};

pub use crate::rules::{
    GameGoal, GameResult, GoalCheck, GoalGenerator, GoalKind, IllegalPlay, InertGoalCheck,
    NeverWins, OpponentDefeated, WinRule,
};

pub use crate::game::{Match, MatchPhase, MatchSnapshot, PlayOutcome, PlayerSnapshot};

pub use crate::error::{EngineError, Result};
