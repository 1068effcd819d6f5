//! The 4x4 board value type
//!
//! A `Board` is an owned, copyable snapshot of game state: sixteen cells in
//! row-major order, 0 for empty and a power of two (2 or greater) for a tile.
//! The invariant is enforced when a board is built from outside data; the
//! engine's own operations (slide, merge, spawn) preserve it structurally.

use crate::io::error::{GameError, Result};
use std::fmt;

/// Side length of the square board
pub const SIZE: usize = 4;

/// Number of cells in the row-major serialized form
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A fixed 4x4 grid of tile values
///
/// Value type: cheap to copy, compared cell-for-cell, never retained by the
/// engine between calls. Collaborators that persist game state should use the
/// row-major [`Board::to_cells`] / [`Board::from_cells`] form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u32; SIZE]; SIZE],
}

impl Board {
    /// A board with every cell empty
    pub const fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Build a board from rows, validating the tile invariant
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTileValue`] if any non-zero cell is not a
    /// power of two greater than or equal to 2.
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self> {
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(GameError::InvalidTileValue { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Build a board from its row-major serialized form
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCellCount`] if `cells` does not hold
    /// exactly 16 values, or [`GameError::InvalidTileValue`] if any non-zero
    /// value is not a power of two greater than or equal to 2.
    pub fn from_cells(cells: &[u32]) -> Result<Self> {
        if cells.len() != CELL_COUNT {
            return Err(GameError::InvalidCellCount {
                expected: CELL_COUNT,
                actual: cells.len(),
            });
        }

        let mut rows = [[0; SIZE]; SIZE];
        for (slot, &value) in rows.iter_mut().flatten().zip(cells) {
            *slot = value;
        }
        Self::from_rows(rows)
    }

    /// Construct directly from rows the engine has already shaped
    pub(crate) const fn from_rows_raw(rows: [[u32; SIZE]; SIZE]) -> Self {
        Self { cells: rows }
    }

    /// The row-major serialized form: 16 cells, row by row
    pub fn to_cells(&self) -> [u32; CELL_COUNT] {
        let mut cells = [0; CELL_COUNT];
        for (slot, &value) in cells.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = value;
        }
        cells
    }

    /// Value at the given position, 0 for empty or out-of-range positions
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells
            .get(row)
            .and_then(|values| values.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Overwrite one cell
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|values| values.get_mut(col)) {
            *slot = value;
        }
    }

    /// The board's rows, top to bottom
    pub const fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// The board with rows and columns swapped
    ///
    /// Its own inverse: transposing twice returns the original board.
    pub fn transposed(&self) -> Self {
        let mut out = Self::empty();
        for (row, values) in self.cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                out.set(col, row, value);
            }
        }
        out
    }

    /// The board with each row's cells in reverse order
    ///
    /// Its own inverse, like [`Board::transposed`].
    pub fn reversed_rows(&self) -> Self {
        let mut out = *self;
        for row in &mut out.cells {
            row.reverse();
        }
        out
    }

    /// Positions of all empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empties = Vec::new();
        for (row, values) in self.cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    empties.push((row, col));
                }
            }
        }
        empties
    }

    /// Whether at least one cell is empty
    pub fn has_empty(&self) -> bool {
        self.cells.iter().flatten().any(|&value| value == 0)
    }

    /// The largest tile value on the board, 0 for an empty board
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for values in &self.cells {
            for &value in values {
                if value == 0 {
                    write!(f, "     .")?;
                } else {
                    write!(f, "{value:6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
