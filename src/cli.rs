//! Text commands for the terminal client.

use crate::common::Square;
use crate::controller::Event;
use crate::protocol::GameId;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  new              create a game (you play red)
  join <id>        join a game (you play black)
  <row> <col>      click a square, e.g. `5 2`
  resize <width>   set the board width in pixels
  reset            leave the current game
  quit             exit";

fn parse_index(token: &str, what: &str) -> Result<u8, String> {
    token
        .parse::<u8>()
        .map_err(|_| format!("Invalid {} '{}' - must be a number 0-7", what, token))
}

/// Parse a square given as `row col` or `row,col`.
pub fn parse_square(input: &str) -> Result<Square, String> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err("Expected a row and a column, e.g. `5 2`".to_string());
    };
    let row = parse_index(row, "row")?;
    let col = parse_index(col, "column")?;
    Square::new(row, col).map_err(|e| e.to_string())
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Err("Empty input".to_string());
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word.to_ascii_lowercase().as_str() {
        "new" => Ok(Command::Event(Event::NewGame)),
        "join" if !rest.is_empty() => Ok(Command::Event(Event::JoinGame(GameId::new(rest)))),
        "join" => Err("join needs a game id".to_string()),
        "reset" => Ok(Command::Event(Event::Reset)),
        "resize" => rest
            .parse::<f32>()
            .ok()
            .filter(|w| w.is_finite() && *w > 0.0)
            .map(|width| Command::Event(Event::Resize { width }))
            .ok_or_else(|| format!("Invalid width '{}'", rest)),
        "click" => parse_square(rest).map(|sq| Command::Event(Event::Click(sq))),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => parse_square(line).map(|sq| Command::Event(Event::Click(sq))),
    }
}
