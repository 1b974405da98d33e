//! Game configuration: grid geometry, number pool, song count.
//!
//! The grid is the classic 5x5 bingo layout with a free center. The number
//! pool defaults to 75 (five columns of 15, B-I-N-G-O), independent of the
//! song count that sizes the roulette.

use serde::{Deserialize, Serialize};

/// Cells per side of the card.
pub const GRID_SIZE: usize = 5;

/// Total cells on a card.
pub const CARD_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Index of the free center cell (row 2, column 2).
pub const FREE_INDEX: usize = 12;

/// Number of columns, each drawing from its own disjoint range.
pub const COLUMN_COUNT: usize = GRID_SIZE;

/// Column containing the free cell; it draws one fewer number.
pub const CENTER_COLUMN: usize = 2;

/// Default number pool for card generation (standard 75-ball bingo).
pub const DEFAULT_POOL_SIZE: u32 = 75;

/// Smallest pool the generator will work with: every column must be able
/// to draw 5 distinct numbers. Smaller configured pools are clamped up.
pub const MIN_POOL_SIZE: u32 = CARD_CELLS as u32;

/// Default size of the track library driving the roulette.
pub const DEFAULT_SONG_COUNT: u32 = 70;

/// Engine configuration.
///
/// `pool_size` and `song_count` are independent: the card pool stays at the
/// standard 75 even when the party only brought 40 songs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number pool for card generation.
    pub pool_size: u32,
    /// Number of tracks in the roulette.
    pub song_count: u32,
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            song_count: DEFAULT_SONG_COUNT,
        }
    }

    /// Set the card number pool size.
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set the roulette song count.
    #[must_use]
    pub fn with_song_count(mut self, song_count: u32) -> Self {
        self.song_count = song_count;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the effective song count from a stored override.
///
/// A parseable positive override is honored but clamped to
/// [`DEFAULT_SONG_COUNT`]; anything else (absent, malformed, zero,
/// negative) falls back to the default.
#[must_use]
pub fn effective_song_count(stored: Option<&str>) -> u32 {
    match stored.and_then(|raw| raw.trim().parse::<i64>().ok()) {
        Some(n) if n > 0 => n.min(i64::from(DEFAULT_SONG_COUNT)) as u32,
        _ => DEFAULT_SONG_COUNT,
    }
}

/// Partition `1..=pool_size` into the five inclusive column ranges.
///
/// The pool is clamped up to [`MIN_POOL_SIZE`] so every range holds at
/// least [`GRID_SIZE`] numbers, then split as evenly as possible with
/// earlier columns taking the remainder. The default pool of 75 yields the
/// standard 15-per-column layout.
#[must_use]
pub fn column_ranges(pool_size: u32) -> [(u32, u32); COLUMN_COUNT] {
    let pool = u64::from(pool_size.max(MIN_POOL_SIZE));
    let base = pool / COLUMN_COUNT as u64;
    let remainder = (pool % COLUMN_COUNT as u64) as usize;

    let mut ranges = [(0, 0); COLUMN_COUNT];
    let mut start = 1u64;
    for (col, slot) in ranges.iter_mut().enumerate() {
        let len = base + u64::from(col < remainder);
        *slot = (start as u32, (start + len - 1) as u32);
        start += len;
    }
    ranges
}
