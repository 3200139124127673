//! Plain-text board drawing: a boxed grid with 1-based row and column
//! headers, one symbol per cell.

use sapper_core::{Board, CellLabel, Coord2, PlayerCell};

/// Which projection of the board to draw. The truth view is only shown
/// once a game has ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardView {
    Player,
    Truth,
}

pub fn render(board: &Board, view: BoardView) -> String {
    let (rows, cols) = board.size();

    let header: String = (1..=u16::from(cols)).map(|c| format!(" {c} |")).collect();
    let header = format!("   |{header}");
    let rule = "-".repeat(header.chars().count());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in 0..rows {
        out.push_str(&format!("{:>2} |", u16::from(row) + 1));
        for col in 0..cols {
            out.push_str(&format!(" {} |", symbol(board, (row, col), view)));
        }
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }

    out
}

fn symbol(board: &Board, coords: Coord2, view: BoardView) -> char {
    // coordinates come from iterating the board's own size
    match view {
        BoardView::Player => match board.player_cell(coords).unwrap() {
            PlayerCell::Hidden => '*',
            PlayerCell::Flagged => 'F',
            PlayerCell::Revealed(label) => label_symbol(label),
        },
        BoardView::Truth => label_symbol(board.truth_label(coords).unwrap()),
    }
}

fn label_symbol(label: CellLabel) -> char {
    match label {
        CellLabel::Mine => 'M',
        CellLabel::Empty => ' ',
        CellLabel::Count(n) => (b'0' + n) as char,
    }
}
