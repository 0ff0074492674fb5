//! Board snapshot representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BOARD_WIDTH, CELL_COUNT};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A player mark. X always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Immutable snapshot of the nine cells, row-major.
///
/// Boards are `Copy`; every move produces a new value through
/// [`crate::tictactoe::apply_move`] and never touches the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from raw cells. No legality checks are made, so this is
    /// how synthetic positions are injected.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored and the first nine remaining characters are read.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters are present or
    /// any of the first nine is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().take(CELL_COUNT).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Nine-character encoding using `X`, `O` and `.`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Get cell at position, `None` past the board
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Count the cells held by one player.
    pub fn count(&self, player: Player) -> usize {
        let target = player.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Copy of this board with one cell replaced. Callers validate `pos`.
    #[must_use = "with_cell returns a new board; the original is unchanged"]
    pub(crate) fn with_cell(&self, pos: usize, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[pos] = cell;
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = chunk.iter().map(|c| c.to_char()).collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
