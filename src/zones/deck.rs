//! The shared draw pile of a match.
//!
//! The deck starts with one copy of every catalog template, in catalog order.
//! Drawing from an empty deck refills it from the catalog and reshuffles, so
//! `draw` always yields a card.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::cards::{CardCatalog, CardHandle};
use crate::core::{GameLogger, GameRng, PlayerState, Verbosity};

/// Match-scoped draw pile. The front of the queue is the top of the deck.
#[derive(Clone, Debug)]
pub struct Deck {
    catalog: Arc<CardCatalog>,
    cards: VecDeque<CardHandle>,
    rng: GameRng,
    refills: u32,
}

impl Deck {
    /// Create a deck holding every catalog card, unshuffled.
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, rng: GameRng) -> Self {
        let cards = catalog.handles().collect();
        Self {
            catalog,
            cards,
            rng,
            refills: 0,
        }
    }

    /// Remove and return the top card, refilling first if the deck is empty.
    pub fn draw(&mut self) -> CardHandle {
        loop {
            if let Some(card) = self.cards.pop_front() {
                return card;
            }
            // Catalogs are never empty, so one refill always yields a card.
            self.refill();
        }
    }

    /// Draw the top card into `player`'s hand.
    pub fn deal_to(&mut self, player: &mut PlayerState, logger: &GameLogger) -> CardHandle {
        let refills = self.refills;
        let card = self.draw();
        if self.refills != refills {
            logger.normal("deck", "Deck empty, reinitialized from catalog and shuffled");
        }
        if logger.enabled(Verbosity::Verbose) {
            logger.verbose(
                "deck",
                format!("{} drew {}", player.name(), self.catalog[card].name),
            );
        }
        player.draw_into(card);
        card
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(self.cards.make_contiguous());
    }

    fn refill(&mut self) {
        self.cards.clear();
        self.cards.extend(self.catalog.handles());
        self.shuffle();
        self.refills += 1;
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of automatic refills so far.
    #[must_use]
    pub fn refills(&self) -> u32 {
        self.refills
    }

    /// Cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = CardHandle> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_deck(seed: u64) -> Deck {
        Deck::new(Arc::new(CardCatalog::standard()), GameRng::new(seed))
    }

    #[test]
    fn test_new_deck_is_catalog_order() {
        let deck = standard_deck(1);
        let catalog = deck.catalog().clone();

        assert_eq!(deck.remaining_count(), catalog.len());
        let order: Vec<_> = deck.iter().collect();
        let expected: Vec<_> = catalog.handles().collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = standard_deck(1);
        let first = deck.iter().next().unwrap();

        assert_eq!(deck.draw(), first);
        assert_eq!(deck.remaining_count(), deck.catalog().len() - 1);
    }

    #[test]
    fn test_empty_deck_refills_and_reshuffles() {
        let mut deck = standard_deck(3);
        let size = deck.catalog().len();

        for _ in 0..size {
            deck.draw();
        }
        assert_eq!(deck.remaining_count(), 0);
        assert_eq!(deck.refills(), 0);

        deck.draw();
        assert_eq!(deck.refills(), 1);
        assert_eq!(deck.remaining_count(), size - 1);
    }

    #[test]
    fn test_deal_to_logs_refill() {
        use crate::core::{EngineConfig, OutputMode};

        let catalog = Arc::new(CardCatalog::standard());
        let mut deck = Deck::new(catalog.clone(), GameRng::new(2));
        let mut player = PlayerState::new("A", &EngineConfig::default());
        let logger = GameLogger::new(Verbosity::Verbose, OutputMode::Memory);

        for _ in 0..catalog.len() + 1 {
            deck.deal_to(&mut player, &logger);
        }

        assert_eq!(player.hand().len(), catalog.len() + 1);
        let logs = logger.logs();
        assert_eq!(logs.iter().filter(|e| e.message.contains("reinitialized")).count(), 1);
        assert_eq!(logs[0].message, "A drew If Statement");
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut deck = standard_deck(5);
        let mut before: Vec<_> = deck.iter().collect();

        deck.shuffle();

        let mut after: Vec<_> = deck.iter().collect();
        assert_ne!(before, after);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = standard_deck(11);
        let mut b = standard_deck(11);
        a.shuffle();
        b.shuffle();
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }
}
