//! Subcommands of the `tictactoe` binary

pub mod outcome;
pub mod play;
pub mod replay;
