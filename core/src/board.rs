use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won, when the last safe cell is revealed
/// - InProgress -> Lost, when a mine is revealed
///
/// `Won` and `Lost` are absorbing, every later move is a no-op.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a single [`Board::reveal`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub outcome: RevealOutcome,
    /// Every cell that became revealed during the call, in reveal order.
    pub revealed: Vec<Coord2>,
}

impl Reveal {
    const fn unchanged() -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            revealed: Vec::new(),
        }
    }
}

/// A single game from first move to win or loss.
///
/// A board is never reused: starting over means building a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Cell>,
    revealed_safe_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// New game with mines placed from the injected random source.
    pub fn new<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        Self::from_layout(RandomLayoutGenerator::new(rng).generate(config))
    }

    /// New game with a reproducible mine placement.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        log::debug!("seed: {}", seed);
        Self::from_layout(RandomLayoutGenerator::from_seed(seed).generate(config))
    }

    /// New game on a known layout, adjacency counts are computed here once.
    pub fn from_layout(layout: MineLayout) -> Self {
        let config = layout.config();
        let (rows, cols) = config.size();
        let grid = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if layout[coords] {
                Cell::mine()
            } else {
                Cell::safe(layout.adjacent_mine_count(coords))
            }
        });
        log::debug!(
            "New {}x{} board with {} mines",
            rows,
            cols,
            config.mines()
        );

        Self {
            config,
            grid,
            revealed_safe_count: 0,
            flagged_count: 0,
            state: GameState::InProgress,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        (self.config.mines() as isize) - (self.flagged_count as isize)
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Raw cell state, including whether it holds a mine. Use [`Board::cell_view`] for anything
    /// shown to the player.
    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.grid[coords.to_nd_index()])
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if in_bounds(coords, size) {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds { coords, size })
        }
    }

    /// Flag or unflag a hidden cell. Revealed cells and finished games are left untouched.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.state.is_finished() {
            log::trace!("Ignoring flag at {:?}, game is over", coords);
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.is_revealed() {
            return Ok(FlagOutcome::NoChange);
        }

        Ok(if cell.toggle_flag() {
            self.flagged_count += 1;
            FlagOutcome::Flagged
        } else {
            self.flagged_count -= 1;
            FlagOutcome::Unflagged
        })
    }

    /// Reveal a hidden cell, cascading through zero-adjacency regions.
    ///
    /// Revealing a flagged or already revealed cell, or any cell after the game is over, is a
    /// no-op. Only coordinates outside the board are an error.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Reveal> {
        let coords = self.validate_coords(coords)?;

        if self.state.is_finished() {
            log::trace!("Ignoring reveal at {:?}, game is over", coords);
            return Ok(Reveal::unchanged());
        }

        let cell = &mut self.grid[coords.to_nd_index()];
        if !cell.is_hidden() {
            return Ok(Reveal::unchanged());
        }

        if cell.is_mine() {
            cell.reveal();
            self.triggered_mine = Some(coords);
            self.state = GameState::Lost;
            log::debug!("Hit mine at {:?}, game lost", coords);
            return Ok(Reveal {
                outcome: RevealOutcome::HitMine,
                revealed: vec![coords],
            });
        }

        let revealed = self.flood_reveal(coords);

        let outcome = if self.revealed_safe_count == self.config.safe_cells() {
            self.state = GameState::Won;
            log::debug!("All {} safe cells revealed, game won", self.revealed_safe_count);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };

        Ok(Reveal { outcome, revealed })
    }

    /// Reveals `start` and, while zero cells are found, their whole neighbourhood. Each cell is
    /// queued at most once, so the work is bounded by the board area.
    fn flood_reveal(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut revealed = Vec::new();
        let mut visited = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.grid[coords.to_nd_index()];

            // flags stop the cascade, mines never border a zero cell
            if !cell.is_hidden() || cell.is_mine() {
                continue;
            }

            cell.reveal();
            let adjacent_mines = cell.adjacent_mines();
            self.revealed_safe_count += 1;
            revealed.push(coords);

            if adjacent_mines == Some(0) {
                let before = to_visit.len();
                to_visit.extend(
                    self.grid
                        .iter_neighbors(coords)
                        .filter(|&pos| self.grid[pos.to_nd_index()].is_hidden())
                        .filter(|&pos| visited.insert(pos)),
                );
                log::trace!(
                    "Zero cell at {:?}, queued {} neighbors",
                    coords,
                    to_visit.len() - before
                );
            }
        }

        revealed
    }
}
