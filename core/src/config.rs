use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count for one game.
///
/// Only valid configurations can be built: both dimensions are positive and at least one cell is
/// left without a mine, otherwise the game could never be won.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Coord2,
    mines: CellCount,
}

impl BoardConfig {
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 || mines >= area(rows, cols) {
            return Err(BoardError::InvalidConfiguration { rows, cols, mines });
        }
        Ok(Self::new_unchecked((rows, cols), mines))
    }

    pub(crate) const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }

    /// Number of cells that have to be revealed to win.
    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}
