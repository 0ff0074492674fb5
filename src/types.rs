//! Board addressing: sizes and cell coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Width (and height) of the board.
pub const BOARD_WIDTH: usize = 3;

/// Column and row of a cell, both in 0-2.
///
/// Derived from a row-major index `i` as `column = i mod 3` and
/// `row = (i - column) / 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub column: usize,
    pub row: usize,
}

impl Coordinates {
    /// Map a row-major cell index to its coordinates.
    ///
    /// Indices past the board are mapped arithmetically; callers validate the
    /// index first.
    pub fn from_index(index: usize) -> Self {
        let column = index % BOARD_WIDTH;
        let row = (index - column) / BOARD_WIDTH;
        Coordinates { column, row }
    }

    /// Inverse of [`Coordinates::from_index`].
    pub fn to_index(self) -> usize {
        self.row * BOARD_WIDTH + self.column
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
