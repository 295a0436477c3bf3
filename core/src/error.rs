use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board configuration: {rows}x{cols} with {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Coordinates {coords:?} are outside the {size:?} board")]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Unknown difficulty {0:?}, expected easy, normal or hard")]
    UnknownDifficulty(String),
}

pub type Result<T> = core::result::Result<T, BoardError>;
