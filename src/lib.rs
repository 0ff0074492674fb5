//! Tic-Tac-Toe with move history and time travel
//!
//! This crate provides:
//! - A pure rules engine over immutable board snapshots (moves, wins, draws)
//! - A history controller that records every snapshot, lets the player jump
//!   back to any of them, and branches when a move is made from the past
//! - A presentation-facing view of a game and a small command-line front end

pub mod cli;
pub mod error;
pub mod history;
pub mod tictactoe;
pub mod types;
pub mod view;

pub use error::{Error, IllegalMoveReason, Result};
pub use history::{GameHistory, GameState, MoveRecord, Status};
pub use tictactoe::{Board, Cell, Outcome, Player};
pub use types::Coordinates;
pub use view::{GameView, MoveEntry, MoveOrder};
