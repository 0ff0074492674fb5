//! Presentation-facing projection of a game
//!
//! Nothing here is game state. [`GameView`] is a read-only snapshot built from
//! a [`GameHistory`]; the move-list order is a display preference owned by
//! whoever renders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::history::GameHistory;
use crate::tictactoe::{Cell, Line};
use crate::types::BOARD_WIDTH;

/// Display order of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    #[default]
    Ascending,
    Descending,
}

impl MoveOrder {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOrder::Ascending => "ascending",
            MoveOrder::Descending => "descending",
        }
    }
}

impl fmt::Display for MoveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveOrder {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(MoveOrder::Ascending),
            "desc" | "descending" => Ok(MoveOrder::Descending),
            _ => Err(crate::Error::InvalidCommand {
                input: s.to_string(),
                expected: "ascending, descending".to_string(),
            }),
        }
    }
}

/// One line of the move list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub step: usize,
    pub column: Option<usize>,
    pub row: Option<usize>,
    pub label: String,
    /// The snapshot on display
    pub current: bool,
}

impl MoveEntry {
    fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub cells: [Cell; 9],
    pub status: String,
    pub winning_line: Option<Line>,
    pub position: usize,
    pub order: MoveOrder,
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    pub fn from_history(history: &GameHistory, order: MoveOrder) -> Self {
        let mut moves: Vec<MoveEntry> = history
            .records()
            .iter()
            .enumerate()
            .map(|(step, record)| MoveEntry {
                step,
                column: record.column(),
                row: record.row(),
                label: MoveEntry::label_for(step),
                current: step == history.position(),
            })
            .collect();
        if order == MoveOrder::Descending {
            moves.reverse();
        }

        GameView {
            cells: *history.current_board().cells(),
            status: history.status().to_string(),
            winning_line: history.winning_line(),
            position: history.position(),
            order,
            moves,
        }
    }

    pub fn is_winning_cell(&self, cell: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&cell))
    }

    pub fn to_json(&self) -> Result<String, crate::Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Plain-text frame.
///
/// Empty cells show their index so a player can type it; cells on the winning
/// line are bracketed; the active move-list entry is marked with `>`.
impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for (col, &cell) in chunk.iter().enumerate() {
                let idx = row * BOARD_WIDTH + col;
                let symbol = match cell {
                    Cell::Empty => char::from_digit(idx as u32, 10).unwrap_or(' '),
                    other => other.to_char(),
                };
                if col > 0 {
                    write!(f, "|")?;
                }
                if self.is_winning_cell(idx) {
                    write!(f, "[{symbol}]")?;
                } else {
                    write!(f, " {symbol} ")?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "\n{}", self.status)?;
        writeln!(f, "Moves ({}):", self.order)?;
        for entry in &self.moves {
            let marker = if entry.current { '>' } else { ' ' };
            write!(f, "{marker} {:>2}. ", entry.step)?;
            match (entry.column, entry.row) {
                (Some(column), Some(row)) => write!(f, "({column}, {row})")?,
                _ => write!(f, "(-, -)")?,
            }
            writeln!(f, " {}", entry.label)?;
        }
        Ok(())
    }
}
