//! Display alphabet for the console board

use crate::Stone;

pub const EMPTY_SYMBOL: char = '.';
pub const BLACK_SYMBOL: char = 'X';
pub const WHITE_SYMBOL: char = 'O';

/// Character drawn for a cell
pub fn symbol(stone: Stone) -> char {
    match stone {
        Stone::Empty => EMPTY_SYMBOL,
        Stone::Black => BLACK_SYMBOL,
        Stone::White => WHITE_SYMBOL,
    }
}
