//! Game rules: play legality, win detection, goals and combinations.
//!
//! The match state machine calls into these but owns none of them:
//! `WinRule` and `GoalCheck` are policies chosen when the match is built.

pub mod combination;
pub mod engine;
pub mod goal;
pub mod legality;

pub use combination::{combination_synergy, combination_value, validate_combination};
pub use engine::{GameResult, NeverWins, OpponentDefeated, WinRule};
pub use goal::{GameGoal, GoalCheck, GoalGenerator, GoalKind, InertGoalCheck};
pub use legality::{can_play_card, check_playable, IllegalPlay};
