//! Random number generation: one deterministic stream, one real one.
//!
//! ## Key Types
//!
//! - [`CardRng`]: a small multiply-xor-shift generator seeded from a card's
//!   seed hash. Bit-for-bit reproducible; the only randomness card layout
//!   ever sees.
//! - [`SpinRng`]: ChaCha8-backed generator for the roulette spin and card-id
//!   minting. Entropy-seeded in production, seedable in tests.
//!
//! Card generation must never consume from [`SpinRng`] - reproducibility of
//! a card from its seed is a hard invariant.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// State increment of the card stream (mulberry32 constant).
const CARD_STREAM_INCREMENT: u32 = 0x6D2B_79F5;

/// Deterministic stream of values in `[0, 1)` for card layout.
///
/// A 32-bit multiply-xor-shift scheme: each call bumps the state by a fixed
/// odd constant and scrambles it through two widening multiplies and three
/// xor-shifts. Same seed, same sequence, on every platform.
#[derive(Clone, Debug)]
pub struct CardRng {
    state: u32,
}

impl CardRng {
    /// Create a stream from a seed hash (see [`seed_hash`]).
    ///
    /// [`seed_hash`]: super::hash::seed_hash
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(CARD_STREAM_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Uniform index in `0..bound`.
    ///
    /// `bound` must be non-zero.
    pub fn index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }

    /// Fisher-Yates shuffle, walking from the high index down.
    ///
    /// Consumes exactly `slice.len() - 1` draws, one per swap, so the draw
    /// order (and therefore the resulting card) is fixed by the seed.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Non-deterministic RNG for the roulette spin and card-id minting.
///
/// Wraps ChaCha8 for speed with decent quality. Production callers use
/// [`SpinRng::from_entropy`]; tests seed it for reproducible runs.
#[derive(Clone, Debug)]
pub struct SpinRng {
    inner: ChaCha8Rng,
}

impl SpinRng {
    /// Create a seeded generator (tests, replays).
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Uniform index in `0..bound`.
    ///
    /// `bound` must be non-zero.
    pub fn index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Choose a random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
