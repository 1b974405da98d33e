//! Per-cell mark state.
//!
//! A `MarkState` is 25 booleans, index-aligned with the card. The free
//! center (index 12) is marked on creation and can never be unmarked; no
//! operation can change the length or surface an error. Malformed persisted
//! input falls back to the default state.

use crate::core::config::{CARD_CELLS, FREE_INDEX};

/// Which cells the player has marked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkState {
    marks: [bool; CARD_CELLS],
}

impl MarkState {
    /// Fresh state: all unmarked except the free center.
    #[must_use]
    pub fn new() -> Self {
        let mut marks = [false; CARD_CELLS];
        marks[FREE_INDEX] = true;
        Self { marks }
    }

    /// Rebuild from persisted values.
    ///
    /// Accepts exactly 25 booleans and forces the center marked; any other
    /// length falls back to [`MarkState::new`].
    #[must_use]
    pub fn from_values(values: Vec<bool>) -> Self {
        match <[bool; CARD_CELLS]>::try_from(values) {
            Ok(mut marks) => {
                marks[FREE_INDEX] = true;
                Self { marks }
            }
            Err(_) => Self::new(),
        }
    }

    /// Parse the persisted JSON form (a 25-element boolean array).
    ///
    /// Invalid JSON or the wrong shape falls back to the default state;
    /// this never errors.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<bool>>(raw) {
            Ok(values) => Self::from_values(values),
            Err(_) => Self::new(),
        }
    }

    /// Serialize to the persisted JSON form.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.marks[..]).unwrap_or_default()
    }

    /// Is the cell at `idx` marked? Out of range reads as unmarked.
    #[must_use]
    pub fn is_marked(&self, idx: usize) -> bool {
        self.marks.get(idx).copied().unwrap_or(false)
    }

    /// Flip the mark at `idx`, returning the new value.
    ///
    /// The free center and out-of-range indices are untouchable; `None`.
    pub fn toggle(&mut self, idx: usize) -> Option<bool> {
        if idx == FREE_INDEX || idx >= CARD_CELLS {
            return None;
        }
        self.marks[idx] = !self.marks[idx];
        Some(self.marks[idx])
    }

    /// Number of marked cells (the free center always counts).
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    /// All 25 values, index-aligned with the card.
    #[must_use]
    pub fn values(&self) -> &[bool; CARD_CELLS] {
        &self.marks
    }
}

impl Default for MarkState {
    fn default() -> Self {
        Self::new()
    }
}
