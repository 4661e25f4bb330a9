//! Injected randomness for dealing.
//!
//! The engine is deterministic apart from two draws: the dealer coin flip in
//! `initial_state` and the deck shuffle in `deal`. Both go through the
//! [`RandomSource`] trait so a driver can supply any generator, and tests can
//! supply a scripted one.
//!
//! ## Key Features of `GameRng`
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use bondtolva::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! let mut a = [1, 2, 3, 4, 5];
//! let mut b = [1, 2, 3, 4, 5];
//! rng.shuffle(&mut a);
//! again.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the randomness the engine consumes.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Uniform random permutation of `slice` in place.
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Deterministic seedable RNG.
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

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
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

impl RandomSource for GameRng {
    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
