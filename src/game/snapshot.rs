//! Frozen, serializable views of a match.
//!
//! Snapshots name cards rather than holding catalog handles, so they can be
//! sent to a transport or stored without the catalog that produced them.

use serde::{Deserialize, Serialize};

use crate::cards::CardCatalog;
use crate::core::PlayerState;
use crate::error::Result;
use crate::rules::GameGoal;
use crate::zones::Pile;

/// Lifecycle of a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Created, not yet started.
    Uninitialized,
    Active,
    /// Terminal. The match stays queryable but rejects further mutation.
    Won { winner: String },
}

impl MatchPhase {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, MatchPhase::Active)
    }

    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchPhase::Won { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Public state of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub health: i32,
    pub energy: i32,
    pub total_complexity: i32,
    pub hand: Vec<String>,
    pub played: Vec<String>,
    pub discard: Vec<String>,
    pub has_played_card_this_turn: bool,
    pub active_effects: Vec<String>,
}

impl PlayerSnapshot {
    #[must_use]
    pub fn capture(player: &PlayerState, catalog: &CardCatalog) -> Self {
        let names = |pile: &Pile| -> Vec<String> {
            pile.iter().map(|h| catalog[h].name.clone()).collect()
        };
        Self {
            name: player.name().to_string(),
            health: player.health(),
            energy: player.energy(),
            total_complexity: player.total_complexity(),
            hand: names(player.hand()),
            played: names(player.played()),
            discard: names(player.discard()),
            has_played_card_this_turn: player.has_played_card_this_turn(),
            active_effects: player.active_effects().iter().cloned().collect(),
        }
    }
}

/// Public state of a whole match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub phase: MatchPhase,
    /// In join order.
    pub players: Vec<PlayerSnapshot>,
    pub current_player: Option<String>,
    pub goal: Option<GameGoal>,
    pub deck_remaining: usize,
    pub winner: Option<String>,
    pub turn: u32,
}

impl MatchSnapshot {
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;
    use crate::error::EngineError;
    use crate::rules::GoalKind;

    fn sample() -> MatchSnapshot {
        let catalog = CardCatalog::standard();
        let mut player = PlayerState::new("A", &EngineConfig::default());
        player.draw_into(catalog.handle_of("Addition").unwrap());
        player.add_active_effect("focused");

        MatchSnapshot {
            phase: MatchPhase::Won {
                winner: "A".to_string(),
            },
            players: vec![PlayerSnapshot::capture(&player, &catalog)],
            current_player: Some("A".to_string()),
            goal: Some(GameGoal::new(GoalKind::CardTypeBased, 4, true)),
            deck_remaining: 7,
            winner: Some("A".to_string()),
            turn: 3,
        }
    }

    #[test]
    fn test_capture_names_cards() {
        let snapshot = sample();
        let player = snapshot.player("A").unwrap();
        assert_eq!(player.hand, vec!["Addition".to_string()]);
        assert_eq!(player.active_effects, vec!["focused".to_string()]);
        assert!(snapshot.player("B").is_none());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let snapshot = sample();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(MatchSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = sample().to_bytes().unwrap();
        let err = MatchSnapshot::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, EngineError::Serialization(_)));
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["phase"]["Won"]["winner"], "A");
        assert_eq!(json["goal"]["kind"], "CARD_TYPE_BASED");
        assert_eq!(json["players"][0]["energy"], 10);
    }
}
