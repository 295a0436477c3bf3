use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player is allowed to see of a cell.
///
/// Hidden mines are indistinguishable from hidden safe cells until the game is lost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    /// Unflagged mine shown after a loss.
    Mine,
    /// The mine whose reveal lost the game.
    Exploded,
}

impl CellView {
    pub fn from_cell(cell: &Cell, coords: Coord2, board: &Board) -> Self {
        if board.triggered_mine() == Some(coords) {
            Self::Exploded
        } else if cell.is_revealed() {
            Self::Revealed(cell.adjacent_mines().unwrap_or_default())
        } else if cell.is_flagged() {
            Self::Flagged
        } else if cell.is_mine() && board.state() == GameState::Lost {
            Self::Mine
        } else {
            Self::Hidden
        }
    }

    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// Player-facing snapshot of a board, everything a presentation layer needs to draw a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub flagged_count: CellCount,
    pub revealed_safe_count: CellCount,
    pub mines_left: isize,
    pub state: GameState,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let (rows, cols) = board.size();
        let cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            board
                .cell(coords)
                .map(|cell| CellView::from_cell(cell, coords, board))
                .unwrap_or_default()
        });

        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            flagged_count: board.flagged_count(),
            revealed_safe_count: board.revealed_safe_count(),
            mines_left: board.mines_left(),
            state: board.state(),
            cells,
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<CellView> {
        in_bounds(coords, self.size).then(|| self.cells[coords.to_nd_index()])
    }
}

impl Board {
    pub fn view(&self) -> BoardView {
        BoardView::from_board(self)
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let cell = self.cell(coords)?;
        Ok(CellView::from_cell(cell, coords, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn hidden_mines_do_not_leak_while_playing() {
        let mut board = board((3, 3), &[(0, 0), (2, 2)]);
        board.reveal((0, 2)).unwrap();

        let view = board.view();

        assert_eq!(view.get((0, 0)), Some(CellView::Hidden));
        assert_eq!(view.get((2, 2)), Some(CellView::Hidden));
        assert_eq!(view.get((1, 0)), Some(CellView::Hidden));
        assert_eq!(view.get((0, 2)), Some(CellView::Revealed(0)));
        assert_eq!(view.get((0, 1)), Some(CellView::Revealed(1)));
        assert_eq!(view.get((1, 1)), Some(CellView::Revealed(2)));
        assert_eq!(view.get((3, 0)), None);
    }

    #[test]
    fn loss_exposes_remaining_mines() {
        let mut board = board((2, 3), &[(0, 0), (1, 2)]);
        board.toggle_flag((1, 2)).unwrap();
        board.toggle_flag((0, 1)).unwrap();
        board.reveal((0, 0)).unwrap();

        let view = board.view();

        assert_eq!(view.state, GameState::Lost);
        assert_eq!(view.get((0, 0)), Some(CellView::Exploded));
        assert_eq!(view.get((1, 2)), Some(CellView::Flagged));
        assert_eq!(view.get((0, 1)), Some(CellView::Flagged));
        assert_eq!(view.get((1, 0)), Some(CellView::Hidden));
    }

    #[test]
    fn unflagged_mines_show_after_loss() {
        let mut board = board((1, 3), &[(0, 0), (0, 2)]);
        board.reveal((0, 2)).unwrap();

        assert_eq!(board.cell_view((0, 0)), Ok(CellView::Mine));
        assert_eq!(board.cell_view((0, 2)), Ok(CellView::Exploded));
        assert_eq!(board.cell_view((0, 1)), Ok(CellView::Hidden));
    }

    #[test]
    fn won_board_keeps_mines_hidden() {
        let mut board = board((2, 1), &[(0, 0)]);
        board.reveal((1, 0)).unwrap();

        assert_eq!(board.state(), GameState::Won);
        assert_eq!(board.cell_view((0, 0)), Ok(CellView::Hidden));
    }

    #[test]
    fn view_carries_counters() {
        let mut board = board((3, 3), &[(1, 1)]);
        board.reveal((0, 0)).unwrap();
        board.toggle_flag((1, 1)).unwrap();
        board.toggle_flag((2, 2)).unwrap();

        let view = board.view();

        assert_eq!(view.size, (3, 3));
        assert_eq!(view.mine_count, 1);
        assert_eq!(view.flagged_count, 2);
        assert_eq!(view.revealed_safe_count, 1);
        assert_eq!(view.mines_left, -1);
        assert_eq!(view.state, GameState::InProgress);
    }

    #[test]
    fn cell_view_rejects_out_of_bounds() {
        let board = board((2, 2), &[]);
        assert!(board.cell_view((0, 2)).is_err());
    }

    #[test]
    fn view_serializes_to_json() {
        let mut board = board((1, 2), &[(0, 1)]);
        board.reveal((0, 0)).unwrap();

        let json = serde_json::to_value(board.view()).unwrap();

        assert_eq!(json["state"], "Won");
        assert_eq!(json["mines_left"], 1);
        assert_eq!(json["cells"]["dim"], serde_json::json!([1, 2]));
        assert_eq!(json["cells"]["data"][0], serde_json::json!({ "revealed": 1 }));
        assert_eq!(json["cells"]["data"][1], "hidden");
    }
}
