//! Square board of stones with placement and legality checks

use super::{Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GomokuError;
use crate::rules;

/// Game board
///
/// Cells are stored row-major. The size is fixed at construction and the only
/// mutation is [`Board::place_stone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Result<Self, GomokuError> {
        if size < MIN_BOARD_SIZE {
            return Err(GomokuError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        let cell_count = size
            .checked_mul(size)
            .filter(|_| size <= MAX_BOARD_SIZE)
            .ok_or(GomokuError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            })?;
        Ok(Self {
            size,
            cells: vec![Stone::Empty; cell_count],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn check_bounds(&self, pos: Pos) -> Result<usize, GomokuError> {
        if self.contains(pos) {
            Ok(pos.to_index(self.size))
        } else {
            Err(GomokuError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    /// Get stone at position
    pub fn get(&self, pos: Pos) -> Result<Stone, GomokuError> {
        let idx = self.check_bounds(pos)?;
        Ok(self.cells[idx])
    }

    /// Place a stone on an empty cell
    ///
    /// Returns `Ok(false)` without touching the board if the cell is taken.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> Result<bool, GomokuError> {
        let idx = self.check_bounds(pos)?;
        if stone.is_empty() {
            return Err(GomokuError::InvalidStone);
        }
        if !self.cells[idx].is_empty() {
            return Ok(false);
        }
        self.cells[idx] = stone;
        Ok(true)
    }

    /// Whether a stone may go at `(row, col)`; off-board coordinates are simply illegal
    pub fn is_legal_move(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col, self.size)
            && self.cells[Pos::new(row as usize, col as usize).to_index(self.size)].is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Stone::Empty)
    }

    /// Check for five or more `stone`s in a row in any direction
    pub fn has_five_in_row(&self, stone: Stone) -> bool {
        rules::has_five_in_row(self, stone)
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &stone)| (Pos::from_index(idx, size), stone))
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells()
            .filter(|(_, stone)| stone.is_empty())
            .map(|(pos, _)| pos)
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| !s.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: super::DEFAULT_BOARD_SIZE,
            cells: vec![Stone::Empty; super::DEFAULT_BOARD_SIZE * super::DEFAULT_BOARD_SIZE],
        }
    }
}
