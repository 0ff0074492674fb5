//! Move history and time travel
//!
//! [`GameHistory`] owns every snapshot of the game plus the position currently
//! on display. Jumping back keeps the stored future; the next recorded move
//! discards it.

pub mod controller;
pub mod record;

pub use controller::{GameHistory, GameState, Status};
pub use record::MoveRecord;
