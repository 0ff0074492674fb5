//! Error types for the tic-tac-toe history crate

use thiserror::Error;

/// Why a move was refused by the rules engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    #[error("cell index is outside 0-8")]
    OutOfBounds,

    #[error("cell is already occupied")]
    Occupied,

    #[error("the board already has a winner")]
    GameDecided,
}

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move at cell {position}: {reason}")]
    IllegalMove {
        position: usize,
        reason: IllegalMoveReason,
    },

    #[error("history position {position} is out of range (history has {len} records)")]
    OutOfRange { position: usize, len: usize },

    #[error("invalid history: {reason}")]
    InvalidHistory { reason: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid command '{input}'. Expected one of: {expected}")]
    InvalidCommand { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error is a refused move (the "click had no effect" case).
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, Error::IllegalMove { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
