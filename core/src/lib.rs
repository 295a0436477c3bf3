//! Game engine for a single-player mine-detection puzzle.
//!
//! The engine owns every piece of game state and exposes two player intents, [`Board::reveal`]
//! and [`Board::toggle_flag`]. Rendering and input handling belong to the caller, which reads the
//! state back through [`Board::view`].

#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod config;
mod difficulty;
mod error;
mod generator;
mod types;
mod view;

/// Where the mines are on a board, fixed for the whole game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Callers guarantee the mask is non-empty and leaves at least one safe cell.
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).fold(0, |n, _| n + 1);
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines exactly at `mine_coords`, mostly useful for scripted boards and
    /// tests. Duplicate coordinates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let invalid = || BoardError::InvalidConfiguration {
            rows: size.0,
            cols: size.1,
            mines: CellCount::try_from(mine_coords.len()).unwrap_or(CellCount::MAX),
        };

        if size.0 == 0 || size.1 == 0 {
            return Err(invalid());
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(BoardError::OutOfBounds { coords, size });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let layout = Self::from_mine_mask(mine_mask);
        if layout.mine_count >= area(size.0, size.1) {
            return Err(invalid());
        }
        Ok(layout)
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size()) && self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .fold(0, |n, _| n + 1)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    /// Whether the presentation layer has anything to redraw.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the presentation layer has anything to redraw.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    /// Whether this reveal ended the game.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_counts_distinct_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2), (0, 0)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert!(layout.contains_mine((2, 2)));
        assert!(!layout.contains_mine((1, 1)));
        assert!(!layout.contains_mine((7, 7)));
    }

    #[test]
    fn layout_adjacency_is_clipped_at_edges() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 1), (1, 0), (2, 2)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((0, 0)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 3);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 1);
    }

    #[test]
    fn layout_rejects_mines_off_the_board() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(BoardError::OutOfBounds {
                coords: (2, 0),
                size: (2, 2)
            })
        );
    }

    #[test]
    fn layout_rejects_boards_without_safe_cells() {
        let all = [(0, 0), (0, 1), (1, 0), (1, 1)];
        assert!(matches!(
            MineLayout::from_mine_coords((2, 2), &all),
            Err(BoardError::InvalidConfiguration { .. })
        ));
        assert!(MineLayout::from_mine_coords((0, 3), &[]).is_err());
    }

    #[test]
    fn layout_config_reflects_mask() {
        let layout = MineLayout::from_mine_coords((2, 5), &[(1, 4)]).unwrap();
        assert_eq!(layout.config(), BoardConfig::new(2, 5, 1).unwrap());
    }

    #[test]
    fn reveal_outcome_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed.has_update());
        assert!(RevealOutcome::HitMine.is_final());
        assert!(!RevealOutcome::Revealed.is_final());
        assert!(FlagOutcome::Unflagged.has_update());
        assert!(!FlagOutcome::NoChange.has_update());
    }
}
