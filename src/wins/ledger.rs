//! Per-card acknowledgment ledger for win alerts.

use serde::{Deserialize, Serialize};

use super::pattern::WinCategory;

/// Which win categories have already been alerted for a card.
///
/// Persisted as a JSON object with boolean fields (`{"row":true,...}`);
/// missing fields read as not shown, so older partial records still load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShownCategories {
    #[serde(default)]
    row: bool,
    #[serde(default)]
    col: bool,
    #[serde(default)]
    diag: bool,
    #[serde(default)]
    full: bool,
}

impl ShownCategories {
    /// Fresh ledger with nothing shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted JSON form; malformed input falls back to empty.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Serialize to the persisted JSON form.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Has this category already been alerted?
    #[must_use]
    pub fn is_shown(&self, category: WinCategory) -> bool {
        *self.slot_ref(category)
    }

    /// Record an alert for a category.
    ///
    /// Returns `true` only the first time a category is acknowledged; the
    /// caller alerts exactly when this returns `true`.
    pub fn acknowledge(&mut self, category: WinCategory) -> bool {
        let slot = self.slot_mut(category);
        if *slot {
            false
        } else {
            *slot = true;
            true
        }
    }

    fn slot_ref(&self, category: WinCategory) -> &bool {
        match category {
            WinCategory::Row => &self.row,
            WinCategory::Col => &self.col,
            WinCategory::Diag => &self.diag,
            WinCategory::Full => &self.full,
        }
    }

    fn slot_mut(&mut self, category: WinCategory) -> &mut bool {
        match category {
            WinCategory::Row => &mut self.row,
            WinCategory::Col => &mut self.col,
            WinCategory::Diag => &mut self.diag,
            WinCategory::Full => &mut self.full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_once() {
        let mut shown = ShownCategories::new();
        assert!(!shown.is_shown(WinCategory::Row));
        assert!(shown.acknowledge(WinCategory::Row));
        assert!(shown.is_shown(WinCategory::Row));
        assert!(!shown.acknowledge(WinCategory::Row));
    }

    #[test]
    fn test_categories_are_independent() {
        let mut shown = ShownCategories::new();
        shown.acknowledge(WinCategory::Diag);
        assert!(!shown.is_shown(WinCategory::Row));
        assert!(!shown.is_shown(WinCategory::Col));
        assert!(!shown.is_shown(WinCategory::Full));
    }

    #[test]
    fn test_json_round_trip() {
        let mut shown = ShownCategories::new();
        shown.acknowledge(WinCategory::Row);
        shown.acknowledge(WinCategory::Full);

        let json = shown.to_json();
        assert_eq!(ShownCategories::from_json(&json), shown);
    }

    #[test]
    fn test_partial_object_loads() {
        let shown = ShownCategories::from_json(r#"{"row":true}"#);
        assert!(shown.is_shown(WinCategory::Row));
        assert!(!shown.is_shown(WinCategory::Col));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(ShownCategories::from_json("nope"), ShownCategories::new());
        assert_eq!(ShownCategories::from_json("[1,2]"), ShownCategories::new());
    }
}
