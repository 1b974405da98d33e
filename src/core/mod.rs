//! Core engine types: seed hashing, RNG streams, configuration.
//!
//! Everything here is UI-agnostic. The deterministic pieces ([`seed_hash`],
//! [`CardRng`], [`column_ranges`]) feed card generation; [`SpinRng`] is the
//! only source of real randomness and never touches card layout.

pub mod config;
pub mod hash;
pub mod rng;

pub use config::{
    column_ranges, effective_song_count, GameConfig, CARD_CELLS, CENTER_COLUMN, COLUMN_COUNT,
    DEFAULT_POOL_SIZE, DEFAULT_SONG_COUNT, FREE_INDEX, GRID_SIZE, MIN_POOL_SIZE,
};
pub use hash::seed_hash;
pub use rng::{CardRng, SpinRng};
