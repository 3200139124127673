//! Parsing of the turn-loop command grammar: `"<row> <col> [f]"` plus the
//! `help` and `quit` tokens. Coordinates stay 1-based here; the session
//! layer performs the offset to board coordinates.

use thiserror::Error;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Move { row: i64, col: i64, flag: bool },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid input. Please enter 'row col flag (optional)'.")]
    WrongShape,
    #[error("Invalid input. 'row' and 'col' should be integers.")]
    NotInteger,
    #[error("Invalid input. The third part should be 'f' for 'flag'.")]
    BadFlagToken,
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "help" | "h" => return Ok(Command::Help),
        "quit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(ParseError::WrongShape);
    }

    let row: i64 = parts[0].parse().map_err(|_| ParseError::NotInteger)?;
    let col: i64 = parts[1].parse().map_err(|_| ParseError::NotInteger)?;

    let flag = match parts.get(2) {
        None => false,
        Some(token) if token.eq_ignore_ascii_case("f") || token.eq_ignore_ascii_case("flag") => {
            true
        }
        Some(_) => return Err(ParseError::BadFlagToken),
    };

    Ok(Command::Move { row, col, flag })
}
