//! Seeded 5x5 card generation.

use serde::{Deserialize, Serialize};

use crate::core::config::{
    column_ranges, CARD_CELLS, CENTER_COLUMN, COLUMN_COUNT, FREE_INDEX, GRID_SIZE,
};
use crate::core::hash::seed_hash;
use crate::core::rng::CardRng;

use super::cell::Cell;

/// A generated bingo card: 25 cells, row-major, free center at index 12.
///
/// Calling [`Card::generate`] twice with the same `(seed, pool_size)`
/// produces bit-identical cards; within a column no number repeats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    cells: [Cell; CARD_CELLS],
}

impl Card {
    /// Generate the card for a text seed over a number pool.
    ///
    /// One shared deterministic stream draws the five columns in order, so
    /// every column's numbers depend on the seed alone. Each column is the
    /// head of a full Fisher-Yates shuffle of its range; the center column
    /// draws one fewer number around the free cell.
    ///
    /// Undersized pools are clamped (see [`column_ranges`]), never an
    /// error: the result is always exactly 25 cells.
    #[must_use]
    pub fn generate(seed: &str, pool_size: u32) -> Self {
        let mut rng = CardRng::new(seed_hash(seed));
        let ranges = column_ranges(pool_size);

        let mut columns: Vec<Vec<u32>> = Vec::with_capacity(COLUMN_COUNT);
        for (col, &(start, end)) in ranges.iter().enumerate() {
            let take = if col == CENTER_COLUMN {
                GRID_SIZE - 1
            } else {
                GRID_SIZE
            };
            columns.push(draw_unique(&mut rng, start, end, take));
        }

        let mut cells = [Cell::Free; CARD_CELLS];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let idx = row * GRID_SIZE + col;
                if idx == FREE_INDEX {
                    continue;
                }
                // Center column rows below the free cell shift down by one.
                let slot = if col == CENTER_COLUMN && row > GRID_SIZE / 2 {
                    row - 1
                } else {
                    row
                };
                cells[idx] = Cell::Number(columns[col][slot]);
            }
        }

        Self { cells }
    }

    /// All 25 cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CARD_CELLS] {
        &self.cells
    }

    /// The cell at a flat index, or `None` if out of range.
    #[must_use]
    pub fn cell(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// The five cells of one column, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Option<[Cell; GRID_SIZE]> {
        if col >= COLUMN_COUNT {
            return None;
        }
        let mut out = [Cell::Free; GRID_SIZE];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = self.cells[row * GRID_SIZE + col];
        }
        Some(out)
    }
}

/// Draw `take` distinct numbers from `start..=end` with a seeded shuffle.
fn draw_unique(rng: &mut CardRng, start: u32, end: u32, take: usize) -> Vec<u32> {
    let mut pool: Vec<u32> = (start..=end).collect();
    rng.shuffle(&mut pool);
    pool.truncate(take);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_POOL_SIZE;

    #[test]
    fn test_free_center() {
        let card = Card::generate("alice", DEFAULT_POOL_SIZE);
        assert_eq!(card.cell(FREE_INDEX), Some(Cell::Free));
        let free_count = card.cells().iter().filter(|c| c.is_free()).count();
        assert_eq!(free_count, 1);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = Card::generate("alice", DEFAULT_POOL_SIZE);
        let b = Card::generate("alice", DEFAULT_POOL_SIZE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_column_accessor_matches_grid() {
        let card = Card::generate("alice", DEFAULT_POOL_SIZE);
        let col = card.column(2).unwrap();
        assert_eq!(col[2], Cell::Free);
        assert_eq!(col[0], card.cell(2).unwrap());
        assert_eq!(col[4], card.cell(22).unwrap());
        assert!(card.column(5).is_none());
    }

    #[test]
    fn test_out_of_range_cell() {
        let card = Card::generate("alice", DEFAULT_POOL_SIZE);
        assert!(card.cell(25).is_none());
    }
}
