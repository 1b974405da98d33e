//! Per-card gameplay session.
//!
//! A [`CardSession`] ties one card seed to its generated layout, the
//! player's marks, and the win-alert ledger, with all persistence flowing
//! through an injected [`Storage`]. Cell activation is the single mutation
//! entry point; it runs the whole toggle-persist-evaluate-notify protocol
//! synchronously inside one call, so there is never a window where marks
//! and the ledger disagree.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::card::Card;
use crate::core::config::{GameConfig, CARD_CELLS, FREE_INDEX};
use crate::core::rng::SpinRng;
use crate::marks::MarkState;
use crate::storage::{
    marks_key, shown_key, Storage, AUTO_CARD_ID_KEY, MARKS_KEY_PREFIX, SHOWN_KEY_PREFIX,
};
use crate::wins::{evaluate, ShownCategories, WinCategory, WinPattern};

/// Base36 digits used by minted card ids.
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random suffix length of a minted card id.
const CARD_ID_SUFFIX_LEN: usize = 6;

/// Result of activating one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellActivation {
    /// The free center was activated; nothing changed. The UI typically
    /// answers with a confetti salute.
    Free,
    /// A number cell was toggled.
    Toggled {
        /// The cell's new mark value.
        marked: bool,
        /// Patterns satisfied now that were not satisfied before.
        newly_achieved: Vec<WinPattern>,
        /// The category to alert for, if any. At most one per activation,
        /// and each category alerts at most once per card.
        alert: Option<WinCategory>,
    },
}

/// One card's gameplay state, bound to its storage.
#[derive(Debug)]
pub struct CardSession<S: Storage> {
    storage: S,
    seed: String,
    card: Card,
    marks: MarkState,
    shown: ShownCategories,
}

impl<S: Storage> CardSession<S> {
    /// Open the session for a card seed, restoring persisted state.
    ///
    /// The card layout is regenerated from the seed; marks and the alert
    /// ledger load from storage, falling back to defaults (center
    /// pre-marked, nothing shown) on missing or malformed values.
    pub fn open(storage: S, seed: impl Into<String>, pool_size: u32) -> Self {
        let seed = seed.into();
        let card = Card::generate(&seed, pool_size);
        let marks = match storage.get(&marks_key(&seed)) {
            Some(raw) => MarkState::from_json(&raw),
            None => MarkState::new(),
        };
        let shown = match storage.get(&shown_key(&seed)) {
            Some(raw) => ShownCategories::from_json(&raw),
            None => ShownCategories::new(),
        };
        Self {
            storage,
            seed,
            card,
            marks,
            shown,
        }
    }

    /// Open the session with the pool size from a [`GameConfig`].
    pub fn open_with(storage: S, seed: impl Into<String>, config: &GameConfig) -> Self {
        Self::open(storage, seed, config.pool_size)
    }

    /// The card seed.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The generated card layout.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// The current mark state.
    #[must_use]
    pub fn marks(&self) -> &MarkState {
        &self.marks
    }

    /// The win-alert ledger.
    #[must_use]
    pub fn shown(&self) -> &ShownCategories {
        &self.shown
    }

    /// Is the cell at `idx` currently marked?
    #[must_use]
    pub fn is_marked(&self, idx: usize) -> bool {
        self.marks.is_marked(idx)
    }

    /// Number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.marks.marked_count()
    }

    /// Activate the cell at `idx`.
    ///
    /// The center returns [`CellActivation::Free`] without mutating
    /// anything. Any other valid index toggles the mark, persists it, and
    /// diffs the win set before and after the toggle: patterns satisfied
    /// only after are newly achieved, and the first of their categories not
    /// yet in the ledger becomes the alert (recorded and persisted in the
    /// same call). Out-of-range indices return `None`.
    pub fn activate(&mut self, idx: usize) -> Option<CellActivation> {
        if idx >= CARD_CELLS {
            return None;
        }
        if idx == FREE_INDEX {
            return Some(CellActivation::Free);
        }

        let before = evaluate(&self.marks);
        let marked = self.marks.toggle(idx)?;
        self.storage
            .set(&marks_key(&self.seed), &self.marks.to_json());

        let after = evaluate(&self.marks);
        let newly_achieved: Vec<WinPattern> = after
            .iter()
            .copied()
            .filter(|pattern| !before.contains(pattern))
            .collect();

        let mut categories: Vec<WinCategory> = Vec::new();
        for pattern in &newly_achieved {
            let category = pattern.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let alert = categories
            .into_iter()
            .find(|&category| self.shown.acknowledge(category));
        if alert.is_some() {
            self.storage
                .set(&shown_key(&self.seed), &self.shown.to_json());
        }

        Some(CellActivation::Toggled {
            marked,
            newly_achieved,
            alert,
        })
    }

    /// Consume the session, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// The persisted auto-minted card id, minting one on first use.
///
/// Seedless visits to the card page get a stable generated identity of the
/// form `c{millis-base36}-{6 random base36 chars}`, persisted so reloads
/// keep the same card.
pub fn auto_card_id<S: Storage>(storage: &mut S, rng: &mut SpinRng) -> String {
    if let Some(id) = storage.get(AUTO_CARD_ID_KEY) {
        if !id.is_empty() {
            return id;
        }
    }

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut id = String::from("c");
    id.push_str(&to_base36(millis));
    id.push('-');
    for _ in 0..CARD_ID_SUFFIX_LEN {
        id.push(BASE36_ALPHABET[rng.index(BASE36_ALPHABET.len())] as char);
    }

    storage.set(AUTO_CARD_ID_KEY, &id);
    id
}

/// Remove every card's marks, alert ledger, and the auto card id.
///
/// The "start a new game" flow: all `bingo:`-namespaced per-card state is
/// dropped so the next visit deals fresh cards with cleared ledgers.
pub fn clear_all_cards<S: Storage>(storage: &mut S) {
    for key in storage.keys() {
        if key.starts_with(MARKS_KEY_PREFIX) || key.starts_with(SHOWN_KEY_PREFIX) {
            storage.remove(&key);
        }
    }
    storage.remove(AUTO_CARD_ID_KEY);
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_auto_card_id_shape() {
        let mut store = MemoryStorage::new();
        let mut rng = SpinRng::seeded(42);
        let id = auto_card_id(&mut store, &mut rng);

        assert!(id.starts_with('c'));
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), CARD_ID_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_auto_card_id_is_stable() {
        let mut store = MemoryStorage::new();
        let mut rng = SpinRng::seeded(42);
        let first = auto_card_id(&mut store, &mut rng);
        let second = auto_card_id(&mut store, &mut rng);
        assert_eq!(first, second);
    }
}
