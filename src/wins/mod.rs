//! Win patterns, detection, and the per-category acknowledgment ledger.
//!
//! ## Key Types
//!
//! - `WinPattern`: one concrete winning line (a row, a column, a diagonal,
//!   or the full card)
//! - `WinCategory`: the coarse grouping used for once-per-card alerting
//! - `ShownCategories`: the persisted record of categories already alerted
//!
//! [`evaluate`] reports everything *currently* satisfied, not what is new.
//! Marks can be toggled off and back on, so callers diff consecutive
//! evaluations to find newly achieved patterns and consult the ledger
//! before alerting - see [`CardSession::activate`].
//!
//! [`CardSession::activate`]: crate::session::CardSession::activate

pub mod detector;
pub mod ledger;
pub mod pattern;

pub use detector::{evaluate, WinSet, DIAG_ANTI, DIAG_MAIN};
pub use ledger::ShownCategories;
pub use pattern::{WinCategory, WinPattern};
