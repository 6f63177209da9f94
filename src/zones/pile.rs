//! Ordered card piles (hand, played, discard).
//!
//! A `Pile` is an ordered list of catalog handles. Duplicates are allowed.
//! Removal takes the first card matching a predicate, so callers decide what
//! "the same card" means (the engine matches by template name).

use serde::{Deserialize, Serialize};

use crate::cards::CardHandle;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<CardHandle>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the end of the pile.
    pub fn push(&mut self, card: CardHandle) {
        self.cards.push(card);
    }

    /// Remove and return the first card matching `pred`.
    pub fn remove_where(&mut self, pred: impl Fn(CardHandle) -> bool) -> Option<CardHandle> {
        let pos = self.cards.iter().position(|&c| pred(c))?;
        Some(self.cards.remove(pos))
    }

    /// Find the first card matching `pred` without removing it.
    #[must_use]
    pub fn find_where(&self, pred: impl Fn(CardHandle) -> bool) -> Option<CardHandle> {
        self.cards.iter().copied().find(|&c| pred(c))
    }

    #[must_use]
    pub fn contains_where(&self, pred: impl Fn(CardHandle) -> bool) -> bool {
        self.cards.iter().any(|&c| pred(c))
    }

    /// Move every card onto the end of `other`, keeping order.
    pub fn drain_into(&mut self, other: &mut Pile) {
        other.cards.append(&mut self.cards);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = CardHandle> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardHandle] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<CardHandle> for Pile {
    fn from_iter<I: IntoIterator<Item = CardHandle>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(i: u32) -> CardHandle {
        CardHandle::new(i)
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut pile: Pile = [h(1), h(2), h(1)].into_iter().collect();

        assert_eq!(pile.remove_where(|c| c == h(1)), Some(h(1)));
        assert_eq!(pile.as_slice(), &[h(2), h(1)]);

        assert_eq!(pile.remove_where(|c| c == h(9)), None);
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_drain_into_keeps_order() {
        let mut hand: Pile = [h(1), h(2)].into_iter().collect();
        let mut discard: Pile = [h(5)].into_iter().collect();

        hand.drain_into(&mut discard);

        assert!(hand.is_empty());
        assert_eq!(discard.as_slice(), &[h(5), h(1), h(2)]);
    }

    #[test]
    fn test_find_and_contains() {
        let pile: Pile = [h(3), h(4)].into_iter().collect();
        assert_eq!(pile.find_where(|c| c.0 > 3), Some(h(4)));
        assert!(pile.contains_where(|c| c == h(3)));
        assert!(!pile.contains_where(|c| c == h(7)));
    }
}
