//! # music-bingo
//!
//! Core engine for a music bingo party game: a roulette-style number spinner
//! tied to track playback, plus deterministic seeded bingo cards whose marks
//! persist across reloads.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Cards**: A card layout is a pure function of its text
//!    seed. The same name always deals the same card, across sessions and
//!    machines.
//!
//! 2. **Injected Persistence**: Nothing touches durable storage directly.
//!    All state flows through the [`Storage`] trait; the UI layer supplies
//!    the backend (browser local storage, [`MemoryStorage`] in tests).
//!
//! 3. **UI-Agnostic**: The engine produces data (cards, mark state, win
//!    sets, track URLs) and never renders anything. Modals, confetti, and
//!    audio wiring live entirely in the embedding layer.
//!
//! ## Win Alerting
//!
//! Marks can be toggled off and back on, so a win line can be achieved,
//! broken, and re-achieved. Wins are evaluated as a full set each mutation
//! and diffed against the previous set; each coarse category (row, column,
//! diagonal, full card) alerts at most once per card via a persisted
//! acknowledgment ledger. See [`session::CardSession::activate`].
//!
//! ## Modules
//!
//! - `core`: Seed hashing, RNG streams, configuration
//! - `card`: Deterministic 5x5 card generation
//! - `marks`: Per-cell mark state with the always-marked free center
//! - `wins`: Win patterns, detection, per-category acknowledgment ledger
//! - `storage`: Injected key-value persistence and the persisted key layout
//! - `session`: Per-card gameplay session (toggle, persist, notify once)
//! - `roulette`: Number spinner, played-number record, track library

pub mod core;
pub mod card;
pub mod marks;
pub mod wins;
pub mod storage;
pub mod session;
pub mod roulette;

// Re-export commonly used types
pub use crate::core::{
    column_ranges, effective_song_count, seed_hash, CardRng, GameConfig, SpinRng, CARD_CELLS,
    DEFAULT_POOL_SIZE, DEFAULT_SONG_COUNT, FREE_INDEX, GRID_SIZE,
};

pub use crate::card::{Card, Cell};

pub use crate::marks::MarkState;

pub use crate::wins::{
    evaluate, ShownCategories, WinCategory, WinPattern, WinSet, DIAG_ANTI, DIAG_MAIN,
};

pub use crate::storage::{marks_key, shown_key, MemoryStorage, Storage};

pub use crate::session::{auto_card_id, clear_all_cards, CardSession, CellActivation};

pub use crate::roulette::{music_library, track_for, Roulette, SpinMode, Track};
