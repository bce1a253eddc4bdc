//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Smallest board on which five-in-a-row is possible
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board; keeps every 1-based coordinate well inside `i32`
pub const MAX_BOARD_SIZE: usize = 999;
/// Board size used when none is given (8x8)
pub const DEFAULT_BOARD_SIZE: usize = 8;
/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Stone colors
///
/// Black always moves first. How a stone is drawn is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

/// Position on the board (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    /// Signed-coordinate bounds check, used before converting to `Pos`
    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && (row as usize) < size && col >= 0 && (col as usize) < size
    }

    /// Step `steps` cells along `(dr, dc)`, or `None` if that leaves the board
    ///
    /// Board sizes are capped at [`MAX_BOARD_SIZE`], so the `i32` casts are lossless.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32, size: usize) -> Option<Pos> {
        let r = self.row as i32 + dr * steps;
        let c = self.col as i32 + dc * steps;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
