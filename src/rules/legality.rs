//! Play legality.
//!
//! A card is playable when the player can pay its energy cost and every one of
//! its requirements is satisfied by a card already in the player's played pile.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardTemplate};
use crate::core::PlayerState;

/// Why a card cannot be played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalPlay {
    InsufficientEnergy { required: i32, available: i32 },
    /// No played card carries this tag or type name.
    UnmetRequirement { requirement: String },
}

impl std::fmt::Display for IllegalPlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlay::InsufficientEnergy { required, available } => {
                write!(f, "not enough energy (need {}, have {})", required, available)
            }
            IllegalPlay::UnmetRequirement { requirement } => {
                write!(f, "requires a played {}", requirement)
            }
        }
    }
}

/// Check whether `player` may play `card`.
///
/// Energy is checked first, then requirements in declaration order; the first
/// failure is returned.
pub fn check_playable(
    player: &PlayerState,
    card: &CardTemplate,
    catalog: &CardCatalog,
) -> Result<(), IllegalPlay> {
    if player.energy() < card.energy_cost {
        return Err(IllegalPlay::InsufficientEnergy {
            required: card.energy_cost,
            available: player.energy(),
        });
    }

    for requirement in &card.requirements {
        let met = player
            .played()
            .contains_where(|h| catalog[h].satisfies(requirement));
        if !met {
            return Err(IllegalPlay::UnmetRequirement {
                requirement: requirement.clone(),
            });
        }
    }

    Ok(())
}

/// Boolean form of [`check_playable`].
#[must_use]
pub fn can_play_card(player: &PlayerState, card: &CardTemplate, catalog: &CardCatalog) -> bool {
    check_playable(player, card, catalog).is_ok()
}
