//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!   (board setup vs. deck shuffling)
//!
//! ## Usage
//!
//! ```
//! use logic_ccg::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! let mut setup = rng.for_context("board");
//! let mut deck = rng.for_context("deck");
//!
//! // Streams are independent, but each is reproducible from the seed
//! let mut again = GameRng::new(42).for_context("board");
//! assert_eq!(setup.gen_bool(0.5), again.gen_bool(0.5));
//! # let _ = deck.gen_bool(0.5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG for board setup and deck shuffles.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so the game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_bool(0.5), rng2.gen_bool(0.5));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..64).map(|_| rng1.gen_bool(0.5)).collect();
        let seq2: Vec<_> = (0..64).map(|_| rng2.gen_bool(0.5)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("board");
        let mut ctx2 = rng.for_context("deck");

        let seq1: Vec<_> = (0..64).map(|_| ctx1.gen_bool(0.5)).collect();
        let seq2: Vec<_> = (0..64).map(|_| ctx2.gen_bool(0.5)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(42).for_context("deck");
        let mut ctx2 = GameRng::new(42).for_context("deck");

        assert_eq!(ctx1.seed(), ctx2.seed());
        for _ in 0..10 {
            assert_eq!(ctx1.gen_bool(0.5), ctx2.gen_bool(0.5));
        }
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_ne!(data, original);

        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_from_entropy_records_seed() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut rng = rng;

        assert_eq!(rng.gen_bool(0.5), replay.gen_bool(0.5));
    }
}
