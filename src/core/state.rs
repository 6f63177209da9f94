//! Per-player battle state.
//!
//! `PlayerState` tracks one player's health, energy, piles and per-turn flag.
//! Every mutation is local to the player. Card moves between piles match by
//! template name and are no-ops when the card is not in hand.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use crate::cards::{CardCatalog, CardHandle, CardTemplate};
use crate::zones::Pile;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    name: String,
    health: i32,
    energy: i32,
    total_complexity: i32,
    hand: Pile,
    played: Pile,
    discard: Pile,
    has_played_card_this_turn: bool,
    /// Free-form labels; carried and reported, not read by any rule.
    active_effects: OrdSet<String>,

    starting_health: i32,
    max_health: i32,
    turn_energy: i32,
}

impl PlayerState {
    /// A fresh player with configured health and turn energy and empty piles.
    #[must_use]
    pub fn new(name: impl Into<String>, config: &EngineConfig) -> Self {
        Self {
            name: name.into(),
            health: config.starting_health,
            energy: config.turn_energy,
            total_complexity: 0,
            hand: Pile::new(),
            played: Pile::new(),
            discard: Pile::new(),
            has_played_card_this_turn: false,
            active_effects: OrdSet::new(),
            starting_health: config.starting_health,
            max_health: config.max_health,
            turn_energy: config.turn_energy,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Sum of complexities of every card played since the last reset.
    #[must_use]
    pub fn total_complexity(&self) -> i32 {
        self.total_complexity
    }

    #[must_use]
    pub fn hand(&self) -> &Pile {
        &self.hand
    }

    #[must_use]
    pub fn played(&self) -> &Pile {
        &self.played
    }

    #[must_use]
    pub fn discard(&self) -> &Pile {
        &self.discard
    }

    #[must_use]
    pub fn has_played_card_this_turn(&self) -> bool {
        self.has_played_card_this_turn
    }

    #[must_use]
    pub fn active_effects(&self) -> &OrdSet<String> {
        &self.active_effects
    }

    /// Cards across hand, played and discard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.played.len() + self.discard.len()
    }

    /// First card in hand with the given name.
    #[must_use]
    pub fn find_in_hand(&self, catalog: &CardCatalog, card_name: &str) -> Option<CardHandle> {
        self.hand.find_where(|h| catalog[h].name == card_name)
    }

    // === Piles ===

    pub fn draw_into(&mut self, card: CardHandle) {
        self.hand.push(card);
    }

    /// Move `card` from hand to the played pile.
    ///
    /// Returns false, changing nothing, if no card of that name is in hand.
    pub fn move_to_played(&mut self, catalog: &CardCatalog, card: &CardTemplate) -> bool {
        match self.hand.remove_where(|h| catalog[h] == *card) {
            Some(handle) => {
                self.played.push(handle);
                self.total_complexity = self.total_complexity.saturating_add(card.complexity);
                self.has_played_card_this_turn = true;
                true
            }
            None => false,
        }
    }

    /// Move `card` from hand to the discard pile.
    ///
    /// Returns false, changing nothing, if no card of that name is in hand.
    pub fn move_to_discard(&mut self, catalog: &CardCatalog, card: &CardTemplate) -> bool {
        match self.hand.remove_where(|h| catalog[h] == *card) {
            Some(handle) => {
                self.discard.push(handle);
                true
            }
            None => false,
        }
    }

    pub fn discard_hand(&mut self) {
        self.hand.drain_into(&mut self.discard);
    }

    // === Turn ===

    /// Hard-reset energy to the turn allowance and clear the played flag.
    pub fn start_turn(&mut self) {
        self.energy = self.turn_energy;
        self.has_played_card_this_turn = false;
    }

    pub fn end_turn(&mut self) {
        self.has_played_card_this_turn = false;
    }

    // === Health and energy ===

    /// Health stays in `[0, max_health]` whatever the sign of `amount`.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.clamp_health(self.health.saturating_sub(amount));
    }

    /// Health stays in `[0, max_health]` whatever the sign of `amount`.
    pub fn heal(&mut self, amount: i32) {
        self.health = self.clamp_health(self.health.saturating_add(amount));
    }

    /// Unbounded above (saturating); never goes below zero.
    pub fn gain_energy(&mut self, amount: i32) {
        self.energy = self.energy.saturating_add(amount).max(0);
    }

    /// Never goes below zero.
    pub fn spend_energy(&mut self, amount: i32) {
        self.energy = self.energy.saturating_sub(amount).max(0);
    }

    fn clamp_health(&self, health: i32) -> i32 {
        health.min(self.max_health).max(0)
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    // === Labels ===

    pub fn add_active_effect(&mut self, label: impl Into<String>) {
        self.active_effects.insert(label.into());
    }

    pub fn remove_active_effect(&mut self, label: &str) {
        self.active_effects.remove(label);
    }

    #[must_use]
    pub fn has_active_effect(&self, label: &str) -> bool {
        self.active_effects.contains(label)
    }

    /// Restore starting health and energy and empty every pile.
    pub fn reset(&mut self) {
        self.health = self.starting_health;
        self.energy = self.turn_energy;
        self.total_complexity = 0;
        self.has_played_card_this_turn = false;
        self.hand.clear();
        self.played.clear();
        self.discard.clear();
        self.active_effects = OrdSet::new();
    }
}
