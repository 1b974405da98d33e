//! Win detection over a mark state.

use smallvec::SmallVec;

use crate::core::config::{CARD_CELLS, GRID_SIZE};
use crate::marks::MarkState;

use super::pattern::WinPattern;

/// Main diagonal cell indices (top-left to bottom-right).
pub const DIAG_MAIN: [usize; GRID_SIZE] = [0, 6, 12, 18, 24];

/// Anti-diagonal cell indices (top-right to bottom-left).
pub const DIAG_ANTI: [usize; GRID_SIZE] = [4, 8, 12, 16, 20];

/// The set of satisfied patterns. At most 13 exist (5 rows, 5 columns,
/// 2 diagonals, full card), so this never spills to the heap.
pub type WinSet = SmallVec<[WinPattern; 13]>;

/// Report every pattern currently satisfied by `marks`.
///
/// Order is fixed: rows 0-4, columns 0-4, main diagonal, anti-diagonal,
/// full card. A pattern appears iff every one of its cells is marked - the
/// always-marked free center participates like any other cell. Novelty is
/// the caller's concern; this reports the complete current set.
#[must_use]
pub fn evaluate(marks: &MarkState) -> WinSet {
    let mut wins = WinSet::new();

    for row in 0..GRID_SIZE {
        let offset = row * GRID_SIZE;
        if (offset..offset + GRID_SIZE).all(|idx| marks.is_marked(idx)) {
            wins.push(WinPattern::Row(row as u8));
        }
    }

    for col in 0..GRID_SIZE {
        if (0..GRID_SIZE).all(|row| marks.is_marked(row * GRID_SIZE + col)) {
            wins.push(WinPattern::Col(col as u8));
        }
    }

    if DIAG_MAIN.iter().all(|&idx| marks.is_marked(idx)) {
        wins.push(WinPattern::DiagMain);
    }
    if DIAG_ANTI.iter().all(|&idx| marks.is_marked(idx)) {
        wins.push(WinPattern::DiagAnti);
    }

    if marks.marked_count() == CARD_CELLS {
        wins.push(WinPattern::Full);
    }

    wins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks_at(indices: &[usize]) -> MarkState {
        let mut marks = MarkState::new();
        for &idx in indices {
            if !marks.is_marked(idx) {
                marks.toggle(idx);
            }
        }
        marks
    }

    #[test]
    fn test_fresh_card_has_no_wins() {
        assert!(evaluate(&MarkState::new()).is_empty());
    }

    #[test]
    fn test_full_card_satisfies_everything() {
        let marks = marks_at(&(0..CARD_CELLS).collect::<Vec<_>>());
        let wins = evaluate(&marks);
        // 5 rows + 5 columns + 2 diagonals + full card.
        assert_eq!(wins.len(), 13);
        assert!(wins.contains(&WinPattern::Full));
    }

    #[test]
    fn test_single_row() {
        let wins = evaluate(&marks_at(&[0, 1, 2, 3, 4]));
        assert_eq!(wins.as_slice(), &[WinPattern::Row(0)]);
    }

    #[test]
    fn test_center_row_uses_free_cell() {
        // Row 2 passes through the free center; four marks complete it.
        let wins = evaluate(&marks_at(&[10, 11, 13, 14]));
        assert_eq!(wins.as_slice(), &[WinPattern::Row(2)]);
    }

    #[test]
    fn test_single_column() {
        let wins = evaluate(&marks_at(&[1, 6, 11, 16, 21]));
        assert_eq!(wins.as_slice(), &[WinPattern::Col(1)]);
    }

    #[test]
    fn test_diagonals() {
        let wins = evaluate(&marks_at(&DIAG_MAIN));
        assert_eq!(wins.as_slice(), &[WinPattern::DiagMain]);

        let wins = evaluate(&marks_at(&DIAG_ANTI));
        assert_eq!(wins.as_slice(), &[WinPattern::DiagAnti]);
    }

    #[test]
    fn test_near_miss_is_not_reported() {
        // Row 0 minus its last cell.
        let wins = evaluate(&marks_at(&[0, 1, 2, 3]));
        assert!(wins.is_empty());
    }

    #[test]
    fn test_crossing_lines_report_both() {
        let wins = evaluate(&marks_at(&[10, 11, 13, 14, 2, 7, 17, 22]));
        assert_eq!(wins.as_slice(), &[WinPattern::Row(2), WinPattern::Col(2)]);
    }
}
