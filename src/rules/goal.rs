//! Match goals.
//!
//! Each match carries a randomly generated goal. Goals are reported to
//! players but no current rule evaluates them: `InertGoalCheck` never
//! considers one achieved.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalKind {
    ComplexityBased,
    CardTypeBased,
    FunctionCreation,
    ResourceManagement,
}

impl GoalKind {
    pub const ALL: [GoalKind; 4] = [
        GoalKind::ComplexityBased,
        GoalKind::CardTypeBased,
        GoalKind::FunctionCreation,
        GoalKind::ResourceManagement,
    ];

    fn describe(self, target: i32) -> String {
        match self {
            GoalKind::ComplexityBased => format!("Reach a total complexity of {}", target),
            GoalKind::CardTypeBased => format!("Play {} cards of the same type", target),
            GoalKind::FunctionCreation => {
                format!("Create a function with at least {} parameters", target)
            }
            GoalKind::ResourceManagement => format!("Collect {} energy points", target),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameGoal {
    pub description: String,
    pub kind: GoalKind,
    pub required_complexity: i32,
    /// Whether players race each other for the goal.
    pub competitive: bool,
}

impl GameGoal {
    #[must_use]
    pub fn new(kind: GoalKind, required_complexity: i32, competitive: bool) -> Self {
        Self {
            description: kind.describe(required_complexity),
            kind,
            required_complexity,
            competitive,
        }
    }
}

/// Random goal generation.
pub struct GoalGenerator;

impl GoalGenerator {
    /// Lowest generated target.
    pub const MIN_TARGET: i32 = 3;
    /// One past the highest generated target.
    pub const MAX_TARGET: i32 = 8;

    /// Uniform kind, target in `[MIN_TARGET, MAX_TARGET)`, fair coin for `competitive`.
    pub fn random(rng: &mut GameRng) -> GameGoal {
        let kind = GoalKind::ALL[rng.gen_range_usize(0..GoalKind::ALL.len())];
        let target = rng.gen_range(Self::MIN_TARGET..Self::MAX_TARGET);
        let competitive = rng.gen_bool(0.5);
        GameGoal::new(kind, target, competitive)
    }
}

/// Goal evaluation, separate from the match's `WinRule`.
pub trait GoalCheck: std::fmt::Debug + Send {
    fn is_achieved(&self, goal: &GameGoal, player: &PlayerState) -> bool;
}

/// Never reports a goal as achieved.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertGoalCheck;

impl GoalCheck for InertGoalCheck {
    fn is_achieved(&self, _goal: &GameGoal, _player: &PlayerState) -> bool {
        false
    }
}
