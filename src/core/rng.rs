//! Deterministic random number generation for deck shuffles and goals.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same shuffles
//! - **Context streams**: Independent sequences for different purposes
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use codeclash::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic RNG backing a match.
///
/// Uses ChaCha8 for speed while keeping uniform shuffles.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().next_u64();
        Self::new(seed)
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// Goal generation uses its own stream so it never shifts deck order.
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform value in `range`.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with `state`.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Seed plus stream position; enough to resume a `GameRng` exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let rolls_a: Vec<_> = (0..50).map(|_| a.gen_range(3..8)).collect();
        let rolls_b: Vec<_> = (0..50).map(|_| b.gen_range(3..8)).collect();
        assert_eq!(rolls_a, rolls_b);
        assert!(rolls_a.iter().all(|r| (3..8).contains(r)));
    }

    #[test]
    fn test_goal_stream_independent_of_parent() {
        let parent = GameRng::new(42);
        let mut deck = parent.for_context("deck");
        let mut goal = parent.for_context("goal");

        let deck_rolls: Vec<_> = (0..10).map(|_| deck.gen_range_usize(0..1000)).collect();
        let goal_rolls: Vec<_> = (0..10).map(|_| goal.gen_range_usize(0..1000)).collect();

        assert_ne!(deck_rolls, goal_rolls);
        assert_eq!(parent.for_context("goal").seed(), goal.seed());
    }

    #[test]
    fn test_shuffle_twelve_cards() {
        let mut rng = GameRng::new(42);
        let mut cards: Vec<u32> = (0..12).collect();

        rng.shuffle(&mut cards);

        assert_ne!(cards, (0..12).collect::<Vec<_>>());
        cards.sort_unstable();
        assert_eq!(cards, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_restore_continues_sequence() {
        let mut rng = GameRng::new(42);
        let mut warmup: Vec<u32> = (0..12).collect();
        rng.shuffle(&mut warmup);

        let saved = rng.state();
        let mut next: Vec<u32> = (0..12).collect();
        rng.shuffle(&mut next);

        let mut restored = GameRng::from_state(&saved);
        let mut replayed: Vec<u32> = (0..12).collect();
        restored.shuffle(&mut replayed);

        assert_eq!(next, replayed);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut copy = GameRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(copy.gen_range_usize(0..1_000_000), original.gen_range_usize(0..1_000_000));
    }
}
