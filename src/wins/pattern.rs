//! Win pattern and category types.

use serde::{Deserialize, Serialize};

use crate::core::config::GRID_SIZE;

/// One concrete winning line on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinPattern {
    /// All five cells of row `0..=4` marked.
    Row(u8),
    /// All five cells of column `0..=4` marked.
    Col(u8),
    /// The main diagonal: indices 0, 6, 12, 18, 24.
    DiagMain,
    /// The anti-diagonal: indices 4, 8, 12, 16, 20.
    DiagAnti,
    /// Every cell on the card marked.
    Full,
}

impl WinPattern {
    /// The coarse category this pattern alerts under.
    #[must_use]
    pub fn category(self) -> WinCategory {
        match self {
            WinPattern::Row(_) => WinCategory::Row,
            WinPattern::Col(_) => WinCategory::Col,
            WinPattern::DiagMain | WinPattern::DiagAnti => WinCategory::Diag,
            WinPattern::Full => WinCategory::Full,
        }
    }

    /// The flat cell indices this pattern covers.
    #[must_use]
    pub fn indices(self) -> Vec<usize> {
        match self {
            WinPattern::Row(r) => {
                let offset = r as usize * GRID_SIZE;
                (offset..offset + GRID_SIZE).collect()
            }
            WinPattern::Col(c) => (0..GRID_SIZE).map(|r| r * GRID_SIZE + c as usize).collect(),
            WinPattern::DiagMain => super::detector::DIAG_MAIN.to_vec(),
            WinPattern::DiagAnti => super::detector::DIAG_ANTI.to_vec(),
            WinPattern::Full => (0..GRID_SIZE * GRID_SIZE).collect(),
        }
    }
}

impl std::fmt::Display for WinPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinPattern::Row(r) => write!(f, "row{}", r),
            WinPattern::Col(c) => write!(f, "col{}", c),
            WinPattern::DiagMain => write!(f, "diag-main"),
            WinPattern::DiagAnti => write!(f, "diag-anti"),
            WinPattern::Full => write!(f, "full"),
        }
    }
}

/// Coarse win grouping used for once-per-card alerting.
///
/// Achieving any row alerts once; a second row on the same card stays
/// silent until the card's ledger is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinCategory {
    Row,
    Col,
    Diag,
    Full,
}

impl std::fmt::Display for WinCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WinCategory::Row => "row",
            WinCategory::Col => "col",
            WinCategory::Diag => "diag",
            WinCategory::Full => "full",
        };
        write!(f, "{}", name)
    }
}
