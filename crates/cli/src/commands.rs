//! Line commands understood by the terminal front end

use anyhow::{bail, Context, Result};
use minichess_core::Square;

pub const HELP: &str = "\
Commands:
  start               start a new game (White moves first)
  pause | resume      pause or resume the game
  reset               back to the initial layout
  move R,C R,C        move the piece on the first square to the second
  select R,C          list where the piece on R,C may go (x marks a capture)
  board               show the board
  log [json]          show the move log
  status              show whose turn it is and the game state
  auto on|off         let the computer answer without the think delay
  help                show this text
  quit                leave";

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Reset,
    Move(Square, Square),
    Select(Square),
    Board,
    Log { json: bool },
    Status,
    Auto(bool),
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&word) = parts.first() else {
            return Ok(None);
        };
        let args = &parts[1..];

        let command = match (word.to_lowercase().as_str(), args) {
            ("start", []) => Command::Start,
            ("pause", []) => Command::Pause,
            ("resume", []) => Command::Resume,
            ("reset", []) => Command::Reset,
            ("move" | "m", [from, to]) => Command::Move(square(from)?, square(to)?),
            ("select" | "s", [at]) => Command::Select(square(at)?),
            ("board" | "b", []) => Command::Board,
            ("log", []) => Command::Log { json: false },
            ("log", ["json"]) => Command::Log { json: true },
            ("status", []) => Command::Status,
            ("auto", ["on"]) => Command::Auto(true),
            ("auto", ["off"]) => Command::Auto(false),
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", _) => Command::Quit,
            (other, _) => bail!("unknown or malformed command: {other} (try `help`)"),
        };
        Ok(Some(command))
    }
}

fn square(text: &str) -> Result<Square> {
    text.parse::<Square>()
        .with_context(|| format!("expected a square as R,C, got {text:?}"))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
