//! Interactive session: user commands mapped onto a [`GameHistory`]

use std::str::FromStr;

use tracing::{info, warn};

use crate::{
    history::GameHistory,
    view::{GameView, MoveOrder},
};

const EXPECTED_COMMANDS: &str = "0-8, move <cell>, jump <step>, toggle, reset, show, help, quit";

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click on a cell
    Move(usize),
    /// Click on a move-list entry
    Jump(usize),
    /// Flip the move-list order
    Toggle,
    Reset,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidCommand {
            input: s.trim().to_string(),
            expected: EXPECTED_COMMANDS.to_string(),
        };

        let mut parts = s.split_whitespace();
        let head = parts.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }
        let number = |arg: Option<&str>| -> Result<usize, crate::Error> {
            arg.and_then(|a| a.parse::<usize>().ok()).ok_or_else(invalid)
        };

        let command = match head.as_str() {
            "move" | "m" => Command::Move(number(arg)?),
            "jump" | "j" => Command::Jump(number(arg)?),
            "toggle" | "t" if arg.is_none() => Command::Toggle,
            "reset" if arg.is_none() => Command::Reset,
            "show" | "s" if arg.is_none() => Command::Show,
            "help" | "h" | "?" if arg.is_none() => Command::Help,
            "quit" | "q" | "exit" if arg.is_none() => Command::Quit,
            _ if arg.is_none() => Command::Move(number(Some(head.as_str()))?),
            _ => return Err(invalid()),
        };
        Ok(command)
    }
}

/// What the session did with a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Game or display changed; re-render
    Updated,
    /// Nothing changed (a rejected move)
    Unchanged,
    /// Nothing changed and the user should be told why
    Notice(String),
    Help,
    Quit,
}

/// A game plus the display preferences of the terminal showing it
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: GameHistory,
    order: MoveOrder,
}

impl Session {
    pub fn new(order: MoveOrder) -> Self {
        Self {
            history: GameHistory::new(),
            order,
        }
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn order(&self) -> MoveOrder {
        self.order
    }

    pub fn view(&self) -> GameView {
        GameView::from_history(&self.history, self.order)
    }

    pub fn apply(&mut self, command: Command) -> Reply {
        match command {
            Command::Move(cell) => match self.history.record_move(cell) {
                Ok(_) => Reply::Updated,
                // A refused click has no visible effect
                Err(_) => Reply::Unchanged,
            },
            Command::Jump(step) => match self.history.jump_to(step) {
                Ok(()) => Reply::Updated,
                Err(err) => {
                    warn!(%err, "jump refused");
                    Reply::Notice(err.to_string())
                }
            },
            Command::Toggle => {
                self.order = self.order.toggle();
                Reply::Updated
            }
            Command::Reset => {
                info!("new game");
                self.history.reset();
                Reply::Updated
            }
            Command::Show => Reply::Updated,
            Command::Help => Reply::Help,
            Command::Quit => Reply::Quit,
        }
    }
}

pub fn help_text() -> String {
    [
        "Commands:",
        "  <cell> | move <cell>   play a cell (0-8, row-major)",
        "  jump <step>            view the board after <step> moves",
        "  toggle                 flip the move list order",
        "  reset                  start a new game",
        "  show                   print the board again",
        "  help                   show this summary",
        "  quit                   leave",
    ]
    .join("\n")
}
