//! A single card cell: a drawn number or the free marker.

use serde::{Deserialize, Serialize};

/// One cell of a bingo card.
///
/// Serializes untagged: numbers as plain integers, the free marker as
/// `null`, so a card renders as a flat 25-element display sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A number drawn from the cell's column range.
    Number(u32),
    /// The free center cell, always considered marked.
    Free,
}

impl Cell {
    /// The drawn number, or `None` for the free cell.
    #[must_use]
    pub fn number(self) -> Option<u32> {
        match self {
            Cell::Number(n) => Some(n),
            Cell::Free => None,
        }
    }

    /// Is this the free center cell?
    #[must_use]
    pub fn is_free(self) -> bool {
        matches!(self, Cell::Free)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Free => write!(f, "FREE"),
        }
    }
}
