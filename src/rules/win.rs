//! Five-in-a-row detection
//!
//! The whole board is rescanned on every call. Boards are small and the check
//! runs once per move, so there is no incremental line tracking.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// Find the first run of five `stone`s, scanning cells in row-major order
///
/// Each candidate run starts at a matching cell and extends forward along one
/// of [`DIRECTIONS`]. `Stone::Empty` never forms a line.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<[Pos; WIN_LENGTH]> {
    if stone.is_empty() {
        return None;
    }

    for (pos, cell) in board.cells() {
        if cell != stone {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            if let Some(line) = line_from(board, pos, dr, dc, stone) {
                return Some(line);
            }
        }
    }
    None
}

/// The `WIN_LENGTH` cells starting at `start`, if all are on the board and hold `stone`
fn line_from(board: &Board, start: Pos, dr: i32, dc: i32, stone: Stone) -> Option<[Pos; WIN_LENGTH]> {
    let mut line = [start; WIN_LENGTH];
    for (step, slot) in line.iter_mut().enumerate() {
        let pos = start.offset(dr, dc, step as i32, board.size())?;
        if board.get(pos).ok()? != stone {
            return None;
        }
        *slot = pos;
    }
    Some(line)
}
