//! Win detection.
//!
//! The match asks its `WinRule` after every successful play whether the
//! acting player has won. The rule is a policy object so the match state
//! machine does not change when the victory condition does.

use serde::{Deserialize, Serialize};

use crate::core::PlayerState;

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Winner(String),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        match self {
            GameResult::Winner(winner) => winner == name,
        }
    }
}

/// Victory condition evaluated for the actor right after a play resolves.
pub trait WinRule: std::fmt::Debug + Send {
    fn has_won(&self, actor: &PlayerState, opponent: &PlayerState) -> bool;
}

/// No play ever wins. This is the default rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverWins;

impl WinRule for NeverWins {
    fn has_won(&self, _actor: &PlayerState, _opponent: &PlayerState) -> bool {
        false
    }
}

/// The actor wins once the opponent's health reaches zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpponentDefeated;

impl WinRule for OpponentDefeated {
    fn has_won(&self, _actor: &PlayerState, opponent: &PlayerState) -> bool {
        opponent.is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;

    #[test]
    fn test_never_wins() {
        let config = EngineConfig::default();
        let actor = PlayerState::new("A", &config);
        let mut opponent = PlayerState::new("B", &config);
        opponent.take_damage(500);

        assert!(!NeverWins.has_won(&actor, &opponent));
    }

    #[test]
    fn test_opponent_defeated() {
        let config = EngineConfig::default();
        let actor = PlayerState::new("A", &config);
        let mut opponent = PlayerState::new("B", &config);

        assert!(!OpponentDefeated.has_won(&actor, &opponent));
        opponent.take_damage(100);
        assert!(OpponentDefeated.has_won(&actor, &opponent));
    }

    #[test]
    fn test_game_result() {
        let result = GameResult::Winner("A".to_string());
        assert!(result.is_winner("A"));
        assert!(!result.is_winner("B"));
    }
}
