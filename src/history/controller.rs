//! History controller: snapshots, active position and derived turn

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::record::MoveRecord;
use crate::tictactoe::{Board, Line, Outcome, Player, apply_move, detect_outcome, next_player_for};

/// Phase of the snapshot currently on display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Drawn,
}

impl From<Outcome> for GameState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => GameState::InProgress,
            Outcome::Win { .. } => GameState::Won,
            Outcome::Draw => GameState::Drawn,
        }
    }
}

/// Status line for the current snapshot
///
/// `Display` gives the text shown to players, e.g. `Next player: O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::Draw => write!(f, "Draw"),
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// Ordered board snapshots plus the position being viewed.
///
/// Invariants: there is always at least the initial record, and `position`
/// always indexes an existing record. Whose turn it is comes from the parity
/// of `position` and is never stored. Deserialization replays the records and
/// refuses input that breaks any of this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    records: Vec<MoveRecord>,
    position: usize,
}

/// Unchecked wire form of [`GameHistory`]
#[derive(Deserialize)]
struct RawHistory {
    records: Vec<MoveRecord>,
    position: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = crate::Error;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let invalid = |reason: String| crate::Error::InvalidHistory { reason };

        match raw.records.first() {
            None => return Err(invalid("no records".to_string())),
            Some(first) if *first != MoveRecord::initial() => {
                return Err(invalid("first record is not the empty game start".to_string()));
            }
            Some(_) => {}
        }

        for (step, pair) in raw.records.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let cell = next
                .cell()
                .ok_or_else(|| invalid(format!("record {} has no move", step + 1)))?;
            let expected = apply_move(&prev.board, cell, next_player_for(step))?;
            if expected != next.board {
                return Err(invalid(format!(
                    "record {} does not follow from record {step}",
                    step + 1
                )));
            }
        }

        if raw.position >= raw.records.len() {
            return Err(crate::Error::OutOfRange {
                position: raw.position,
                len: raw.records.len(),
            });
        }

        Ok(GameHistory {
            records: raw.records,
            position: raw.position,
        })
    }
}

impl GameHistory {
    /// Fresh game: only the empty-board record, X to move
    pub fn new() -> Self {
        GameHistory {
            records: vec![MoveRecord::initial()],
            position: 0,
        }
    }

    /// Play `cells` in order from a fresh game.
    ///
    /// Illegal cells are skipped exactly as [`GameHistory::record_move`] would
    /// skip them. Returns the history and how many cells were rejected.
    pub fn from_moves<I>(cells: I) -> (Self, usize)
    where
        I: IntoIterator<Item = usize>,
    {
        let mut history = Self::new();
        let rejected = cells
            .into_iter()
            .filter(|&cell| history.record_move(cell).is_err())
            .count();
        (history, rejected)
    }

    /// Play `cell` for the player whose turn it is at the current position.
    ///
    /// On success every record after the current position is discarded, the
    /// new record is appended and becomes current; the new position is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the cell is off the board,
    /// occupied, or the current board already has a winner. History and
    /// position are left exactly as they were.
    #[instrument(level = "debug", skip(self), fields(position = self.position))]
    pub fn record_move(&mut self, cell: usize) -> Result<usize, crate::Error> {
        let mark = self.next_player();
        let board = match apply_move(&self.current_snapshot().board, cell, mark) {
            Ok(board) => board,
            Err(err) => {
                debug!(%err, "move rejected");
                return Err(err);
            }
        };

        let discarded = self.records.len() - (self.position + 1);
        self.records.truncate(self.position + 1);
        self.records.push(MoveRecord::after_move(board, cell));
        self.position = self.records.len() - 1;

        debug!(%mark, new_position = self.position, discarded, "move recorded");
        Ok(self.position)
    }

    /// Make `target` the current position without touching the records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfRange`] if `target` is not an existing
    /// record index; the position is left unchanged.
    #[instrument(level = "debug", skip(self), fields(position = self.position))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), crate::Error> {
        if target >= self.records.len() {
            return Err(crate::Error::OutOfRange {
                position: target,
                len: self.records.len(),
            });
        }
        self.position = target;
        debug!(next = %self.next_player(), "jumped");
        Ok(())
    }

    /// Drop every move and start over
    pub fn reset(&mut self) {
        debug!(discarded = self.records.len() - 1, "history reset");
        *self = Self::new();
    }

    /// Record at the current position
    pub fn current_snapshot(&self) -> &MoveRecord {
        // position is kept in bounds by every mutator
        &self.records[self.position]
    }

    pub fn current_board(&self) -> &Board {
        &self.current_snapshot().board
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of records, including the initial one
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; the initial record is never removed and deserialization
    /// refuses an empty record list
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the newest record is on display (no stored future)
    pub fn is_latest(&self) -> bool {
        self.position + 1 == self.records.len()
    }

    /// Mark that moves next from the current position
    pub fn next_player(&self) -> Player {
        next_player_for(self.position)
    }

    pub fn outcome(&self) -> Outcome {
        detect_outcome(self.current_board())
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.outcome().winning_line()
    }

    pub fn state(&self) -> GameState {
        self.outcome().into()
    }

    /// Winner, draw, or whose turn it is
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Win { mark, .. } => Status::Winner(mark),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(self.next_player()),
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
