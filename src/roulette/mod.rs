//! The number roulette and its track library.
//!
//! Each spin draws a uniformly random number that has not been played yet,
//! records it, and maps it to a track for playback. The played set and the
//! current number persist through the injected [`Storage`] so a reload
//! resumes the round; the UI owns the spin animation and the audio element,
//! this module owns only the data.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::rng::SpinRng;
use crate::storage::{Storage, CURRENT_NUMBER_KEY, PLAYED_NUMBERS_KEY, SPIN_MODE_KEY};

/// One playable track in the library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Roulette number, starting at 1.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Playback URL relative to the page.
    pub url: String,
}

/// Build the track library for a song count.
///
/// Files are expected under `songs/` named `1.mp3`, `2.mp3`, ...
#[must_use]
pub fn music_library(song_count: u32) -> Vec<Track> {
    (1..=song_count)
        .map(|id| Track {
            id,
            title: format!("Track {}", id),
            url: format!("songs/{}.mp3", id),
        })
        .collect()
}

/// Find the track for a spun number.
///
/// Falls back when the exact file is missing: the next track by id, then
/// the first track, then `None` for an empty library.
#[must_use]
pub fn track_for(library: &[Track], number: u32) -> Option<&Track> {
    library
        .iter()
        .find(|t| t.id == number)
        .or_else(|| library.iter().find(|t| t.id > number))
        .or_else(|| library.first())
}

/// Whether the next spin is user-triggered or follows track end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinMode {
    /// Spin on button press only.
    #[default]
    Manual,
    /// Spin automatically when the current track ends.
    Auto,
}

impl SpinMode {
    /// Load the persisted preference; anything but `"auto"` reads manual.
    #[must_use]
    pub fn load<S: Storage>(storage: &S) -> Self {
        match storage.get(SPIN_MODE_KEY).as_deref() {
            Some("auto") => SpinMode::Auto,
            _ => SpinMode::Manual,
        }
    }

    /// Persist this preference.
    pub fn store<S: Storage>(self, storage: &mut S) {
        let value = match self {
            SpinMode::Manual => "manual",
            SpinMode::Auto => "auto",
        };
        storage.set(SPIN_MODE_KEY, value);
    }
}

/// Roulette state: which numbers have played, and what plays now.
#[derive(Debug)]
pub struct Roulette<S: Storage> {
    storage: S,
    played: FxHashSet<u32>,
    current: Option<u32>,
    song_count: u32,
    rng: SpinRng,
}

impl<S: Storage> Roulette<S> {
    /// Open the roulette, restoring persisted round state.
    ///
    /// Malformed persisted values fall back to an empty round. Numbers
    /// outside `1..=song_count` are dropped on load, so shrinking the
    /// library between sessions cannot wedge the spinner.
    pub fn open(storage: S, song_count: u32, rng: SpinRng) -> Self {
        let played = storage
            .get(PLAYED_NUMBERS_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<u32>>(&raw).ok())
            .unwrap_or_default()
            .into_iter()
            .filter(|&n| n >= 1 && n <= song_count)
            .collect();
        let current = storage
            .get(CURRENT_NUMBER_KEY)
            .and_then(|raw| raw.parse::<u32>().ok());
        Self {
            storage,
            played,
            current,
            song_count,
            rng,
        }
    }

    /// Open the roulette sized by a [`GameConfig`].
    pub fn open_with(storage: S, config: &GameConfig, rng: SpinRng) -> Self {
        Self::open(storage, config.song_count, rng)
    }

    /// The last spun number, if a round is in progress.
    #[must_use]
    pub fn current(&self) -> Option<u32> {
        self.current
    }

    /// The configured library size.
    #[must_use]
    pub fn song_count(&self) -> u32 {
        self.song_count
    }

    /// All played numbers, ascending.
    #[must_use]
    pub fn played(&self) -> Vec<u32> {
        let mut played: Vec<u32> = self.played.iter().copied().collect();
        played.sort_unstable();
        played
    }

    /// How many numbers are still unplayed.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.song_count - self.played.len() as u32
    }

    /// Has every number been played?
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Spin: draw a random unplayed number, record and persist it.
    ///
    /// Returns `None` once every number has been played; the caller resets
    /// the round to continue.
    pub fn spin(&mut self) -> Option<u32> {
        let candidates: Vec<u32> = (1..=self.song_count)
            .filter(|n| !self.played.contains(n))
            .collect();
        let number = *self.rng.choose(&candidates)?;

        self.played.insert(number);
        self.current = Some(number);
        self.persist();
        Some(number)
    }

    /// Clear the round: no played numbers, no current number.
    pub fn reset(&mut self) {
        self.played.clear();
        self.current = None;
        self.storage.remove(PLAYED_NUMBERS_KEY);
        self.storage.remove(CURRENT_NUMBER_KEY);
    }

    /// Consume the roulette, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let played = self.played();
        self.storage.set(
            PLAYED_NUMBERS_KEY,
            &serde_json::to_string(&played).unwrap_or_default(),
        );
        match self.current {
            Some(n) => self.storage.set(CURRENT_NUMBER_KEY, &n.to_string()),
            None => self.storage.remove(CURRENT_NUMBER_KEY),
        }
    }
}
