//! Text rendering of the board

use std::fmt;

use crate::Board;

use super::theme::symbol;

/// Text view of a board with 1-based row and column labels
///
/// Every column is as wide as the largest label so boards past 9x9 stay
/// aligned.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let size = board.size();
        let width = size.to_string().len();

        // Column numbers
        write!(f, "{:>width$} ", "")?;
        for col in 1..=size {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;

        let mut cells = board.cells();
        for row in 1..=size {
            write!(f, "{row:>width$} ")?;
            for (_, stone) in cells.by_ref().take(size) {
                write!(f, " {:>width$}", symbol(stone))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the board as a string, see [`BoardView`]
pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}
