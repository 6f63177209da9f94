//! Engine configuration.
//!
//! `EngineConfig` carries the numeric rules of a match (health bounds, turn
//! energy, hand size) plus the RNG seed and logger settings. The defaults are
//! the standard rule set; every field can be overridden with a `with_*`
//! builder or loaded from JSON.

use serde::{Deserialize, Serialize};

use super::logger::{OutputMode, Verbosity};
use crate::error::Result;

/// Health a player starts a match with.
pub const DEFAULT_STARTING_HEALTH: i32 = 100;
/// Upper clamp for healing.
pub const DEFAULT_MAX_HEALTH: i32 = 100;
/// Energy a player has at the start of each of their turns.
pub const DEFAULT_TURN_ENERGY: i32 = 10;
/// Cards dealt at start and topped up to on each new round.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Complete engine configuration.
///
/// ```
/// use codeclash::core::EngineConfig;
///
/// let config = EngineConfig::default().with_seed(7).with_hand_size(3);
/// assert_eq!(config.hand_size, 3);
/// assert_eq!(config.turn_energy, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub starting_health: i32,
    pub max_health: i32,
    pub turn_energy: i32,
    pub hand_size: usize,

    /// RNG seed. `None` seeds from OS entropy at match creation.
    pub seed: Option<u64>,

    pub verbosity: Verbosity,
    pub output_mode: OutputMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_health: DEFAULT_STARTING_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
            turn_energy: DEFAULT_TURN_ENERGY,
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
            verbosity: Verbosity::default(),
            output_mode: OutputMode::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_max_health(mut self, health: i32) -> Self {
        self.max_health = health;
        self
    }

    #[must_use]
    pub fn with_turn_energy(mut self, energy: i32) -> Self {
        self.turn_energy = energy;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    #[must_use]
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }
}
