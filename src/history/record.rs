//! One entry of the move history

use serde::{Deserialize, Serialize};

use crate::tictactoe::Board;
use crate::types::Coordinates;

/// Board after a move plus the cell that move filled.
///
/// The synthetic first record holds the empty board and no coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub board: Board,
    pub coordinates: Option<Coordinates>,
}

impl MoveRecord {
    /// The game-start record
    pub fn initial() -> Self {
        MoveRecord {
            board: Board::new(),
            coordinates: None,
        }
    }

    /// Record for a move that filled `cell`, leaving `board`
    pub fn after_move(board: Board, cell: usize) -> Self {
        MoveRecord {
            board,
            coordinates: Some(Coordinates::from_index(cell)),
        }
    }

    pub fn column(&self) -> Option<usize> {
        self.coordinates.map(|c| c.column)
    }

    pub fn row(&self) -> Option<usize> {
        self.coordinates.map(|c| c.row)
    }

    /// Row-major index of the filled cell
    pub fn cell(&self) -> Option<usize> {
        self.coordinates.map(Coordinates::to_index)
    }

    pub fn is_initial(&self) -> bool {
        self.coordinates.is_none()
    }
}

impl Default for MoveRecord {
    fn default() -> Self {
        Self::initial()
    }
}
