//! Deterministic random number generation for target selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical round sequences
//! - **Forkable**: Each round gets an independent branch, so a session
//!   replays identically from one seed regardless of how many answers
//!   were submitted in earlier rounds
//!
//! ```
//! use flag_quiz::core::QuizRng;
//!
//! let mut rng = QuizRng::new(42);
//!
//! // Fork for a round
//! let mut round_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! let a: Vec<_> = (0..8).map(|_| rng.gen_range_usize(0..100)).collect();
//! let b: Vec<_> = (0..8).map(|_| round_rng.gen_range_usize(0..100)).collect();
//! assert_ne!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for per-round streams.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct QuizRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl QuizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to give every round its own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Sample `count` distinct indices from `0..len`, uniformly without
    /// replacement.
    ///
    /// Returns fewer than `count` indices when `len < count`, and an empty
    /// vec when `len == 0`.
    #[must_use]
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        self.shuffle(&mut indices);
        indices.truncate(count);
        indices
    }
}
