//! Tic-Tac-Toe rules engine
//!
//! Pure operations on immutable [`Board`] snapshots: applying moves, detecting
//! wins and draws, and checking injected positions.

pub mod board;
pub mod lines;
pub mod rules;
pub mod validation;

pub use board::{Board, Cell, Player};
pub use lines::{Line, LineAnalyzer, WINNING_LINES};
pub use rules::{Outcome, apply_move, detect_outcome, legal_moves, next_player_for};
