use std::str::FromStr;

use sweeper_core::{BoardError, Coord, Coord2, Difficulty};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    /// Start over, optionally switching to another preset.
    New(Option<Difficulty>),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command {0:?}, type `help` for a list of commands")]
    Unknown(String),
    #[error("Expected `<row> <col>` after {0:?}")]
    MissingCoords(String),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Unexpected trailing input {0:?}")]
    TrailingInput(String),
    #[error(transparent)]
    Difficulty(#[from] BoardError),
}

pub const HELP: &str = "\
commands:
  r, reveal <row> <col>   reveal a cell
  f, flag <row> <col>     flag or unflag a cell
  n, new [difficulty]     start over (easy, normal or hard)
  h, help                 show this help
  q, quit                 leave the game";

fn parse_coord(token: &str) -> Result<Coord, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidCoord(token.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Err(CommandError::Unknown(String::new()));
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" | "f" | "flag" => {
                let (Some(row), Some(col)) = (tokens.next(), tokens.next()) else {
                    return Err(CommandError::MissingCoords(verb.to_string()));
                };
                let coords = (parse_coord(row)?, parse_coord(col)?);
                if verb.starts_with(['r', 'R']) {
                    Command::Reveal(coords)
                } else {
                    Command::Flag(coords)
                }
            }
            "n" | "new" => Command::New(tokens.next().map(str::parse::<Difficulty>).transpose()?),
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        match tokens.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}
