//! Deterministic card generation.
//!
//! ## Key Types
//!
//! - `Cell`: a drawn number or the free center marker
//! - `Card`: a 5x5 grid, row-major, generated from a text seed
//!
//! A card is a pure function of `(seed, pool_size)`: the seed is hashed,
//! the hash seeds a deterministic stream, and each column's numbers are the
//! head of a seeded Fisher-Yates shuffle of that column's range. Cards are
//! never persisted - they are regenerated from the seed on every load.

pub mod cell;
pub mod generator;

pub use cell::Cell;
pub use generator::Card;
