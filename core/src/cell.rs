use serde::{Deserialize, Serialize};

/// One grid position. Mine status and adjacency are fixed when the board is built; only the
/// revealed and flagged markers change during play, and never both at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    revealed: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn mine() -> Self {
        Self {
            mine: true,
            revealed: false,
            flagged: false,
            adjacent_mines: 0,
        }
    }

    pub(crate) const fn safe(adjacent_mines: u8) -> Self {
        Self {
            mine: false,
            revealed: false,
            flagged: false,
            adjacent_mines,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Neither revealed nor flagged, so it can still be revealed.
    pub const fn is_hidden(&self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Number of mines among the Moore neighbours, `None` for mines.
    pub const fn adjacent_mines(&self) -> Option<u8> {
        if self.mine {
            None
        } else {
            Some(self.adjacent_mines)
        }
    }

    pub(crate) fn reveal(&mut self) {
        debug_assert!(self.is_hidden());
        self.revealed = true;
    }

    /// Flips the flag and returns the new flag state.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        debug_assert!(!self.revealed);
        self.flagged = !self.flagged;
        self.flagged
    }
}
