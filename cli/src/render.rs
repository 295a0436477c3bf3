use std::fmt::Write;

use sweeper_core::{BoardView, CellView, GameState};

fn symbol(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '.',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => ' ',
        CellView::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => '*',
        CellView::Exploded => 'X',
    }
}

fn status(state: GameState) -> &'static str {
    match state {
        GameState::InProgress => "playing",
        GameState::Won => "won",
        GameState::Lost => "lost",
    }
}

/// Draws the board as a text grid, rows down the side and columns across the top.
pub fn render(view: &BoardView, title: &str) -> String {
    let (rows, cols) = view.size;
    let width = (rows.max(cols).saturating_sub(1)).to_string().len();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  mines left: {}  [{}]",
        title,
        view.mines_left,
        status(view.state)
    );

    let _ = write!(out, "{:width$} ", "");
    for col in 0..cols {
        let _ = write!(out, " {:>width$}", col);
    }
    out.push('\n');

    for (row, cells) in view.cells.rows().into_iter().enumerate() {
        let _ = write!(out, "{:>width$} ", row);
        for &cell in cells {
            let _ = write!(out, " {:>width$}", symbol(cell));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use sweeper_core::{Board, MineLayout};

    use super::*;

    #[test]
    fn draws_hidden_and_revealed_cells() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 2)]).unwrap();
        let mut board = Board::from_layout(layout);
        board.reveal((1, 0)).unwrap();
        board.toggle_flag((0, 2)).unwrap();

        let text = render(&board.view(), "custom");

        assert_eq!(
            text,
            "custom  mines left: 0  [playing]\n   0 1 2\n0    1 F\n1    1 .\n"
        );
    }

    #[test]
    fn draws_lost_board() {
        let layout = MineLayout::from_mine_coords((1, 3), &[(0, 0), (0, 2)]).unwrap();
        let mut board = Board::from_layout(layout);
        board.reveal((0, 0)).unwrap();

        let text = render(&board.view(), "easy");

        assert!(text.starts_with("easy  mines left: 2  [lost]\n"));
        assert!(text.ends_with("0  X . *\n"));
    }

    #[test]
    fn wide_boards_pad_columns() {
        let layout = MineLayout::from_mine_coords((1, 12), &[]).unwrap();
        let board = Board::from_layout(layout);

        let text = render(&board.view(), "wide");
        let header = text.lines().nth(1).unwrap();

        assert!(header.ends_with(" 9 10 11"));
        assert_eq!(text.lines().nth(2).unwrap().len(), header.len());
    }
}
