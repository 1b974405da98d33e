//! Injected key-value persistence.
//!
//! The engine never talks to a concrete storage medium. The UI layer hands
//! it any [`Storage`] implementation - browser local storage in production,
//! [`MemoryStorage`] in tests - and the engine reads and writes string
//! values under the key layout below.
//!
//! The trait surface is infallible by design: implementations swallow their
//! own errors, and every reader in the engine treats a missing or malformed
//! value as "use the default". Worst case is a silent fallback, never an
//! exception crossing the boundary.
//!
//! ## Key Layout
//!
//! - `bingo:marks:{seed}`: 25-element JSON boolean array
//! - `bingo:shown:{seed}`: JSON object of alerted win categories
//! - `bingo:autoCardId`: the minted card id for seedless visits
//! - `playedNumbers`: sorted JSON array of spun numbers
//! - `currentNumber`: the last spun number as a decimal string
//! - `songCount`: optional override of the track library size
//! - `spinMode`: `"manual"` or `"auto"`

use rustc_hash::FxHashMap;

/// Prefix of per-card mark keys.
pub const MARKS_KEY_PREFIX: &str = "bingo:marks:";

/// Prefix of per-card shown-category keys.
pub const SHOWN_KEY_PREFIX: &str = "bingo:shown:";

/// Key holding the auto-minted card id.
pub const AUTO_CARD_ID_KEY: &str = "bingo:autoCardId";

/// Key holding the set of already played roulette numbers.
pub const PLAYED_NUMBERS_KEY: &str = "playedNumbers";

/// Key holding the current roulette number.
pub const CURRENT_NUMBER_KEY: &str = "currentNumber";

/// Key holding the song-count override.
pub const SONG_COUNT_KEY: &str = "songCount";

/// Key holding the spin mode preference.
pub const SPIN_MODE_KEY: &str = "spinMode";

/// Mark-state key for a card seed.
#[must_use]
pub fn marks_key(seed: &str) -> String {
    format!("{}{}", MARKS_KEY_PREFIX, seed)
}

/// Shown-category key for a card seed.
#[must_use]
pub fn shown_key(seed: &str) -> String {
    format!("{}{}", SHOWN_KEY_PREFIX, seed)
}

/// Durable string key-value storage, scoped per player.
///
/// Modeled on browser local storage: synchronous get/set/remove plus key
/// enumeration. Implementations must not propagate errors - a failed write
/// is dropped, a failed read is `None`.
pub trait Storage {
    /// Read the value under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Delete the value under `key`, if any.
    fn remove(&mut self, key: &str);

    /// All keys currently present.
    fn keys(&self) -> Vec<String>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

/// In-memory storage backend for tests and native embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }
}
