//! Move application and terminal-state detection
//!
//! Everything here is a pure function of a [`Board`] snapshot. Turn order is
//! not stored on the board; callers supply the mark (see [`next_player_for`]).

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};
use super::lines::{Line, LineAnalyzer};
use crate::error::IllegalMoveReason;
use crate::types::CELL_COUNT;

/// Terminal status of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win { mark: Player, line: Line },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Win or draw
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Classify a board.
///
/// Lines are checked in [`super::WINNING_LINES`] order and the first complete
/// one wins, so boards with several lines report deterministically. A full
/// board without a line is a draw.
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some((mark, line)) = LineAnalyzer::first_winning_line(board.cells()) {
        Outcome::Win { mark, line }
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Place `mark` at `cell`, returning the new board.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] when the board already has a winner,
/// when `cell` is outside 0-8, or when the cell is occupied, checked in that
/// order.
pub fn apply_move(board: &Board, cell: usize, mark: Player) -> Result<Board, crate::Error> {
    let illegal = |reason| crate::Error::IllegalMove {
        position: cell,
        reason,
    };

    if detect_outcome(board).winner().is_some() {
        return Err(illegal(IllegalMoveReason::GameDecided));
    }
    if cell >= CELL_COUNT {
        return Err(illegal(IllegalMoveReason::OutOfBounds));
    }
    if !board.is_empty(cell) {
        return Err(illegal(IllegalMoveReason::Occupied));
    }

    Ok(board.with_cell(cell, mark.to_cell()))
}

/// Cells that may be played next: empty cells while the game is undecided.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    if detect_outcome(board).is_terminal() {
        return Vec::new();
    }
    board.empty_positions()
}

/// Mark to move after `position` moves have been played. X opens.
pub fn next_player_for(position: usize) -> Player {
    if position % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}
