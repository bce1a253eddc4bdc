//! Turn sequencing and terminal-state detection
//!
//! [`Game`] drives a [`Board`] through alternating moves. Its public move
//! coordinates are 1-based ([`Move`]) to match what a player types and sees;
//! the board underneath stays 0-based. Translation happens only in
//! [`Game::apply_move`] (inbound) and `From<Pos> for Move` (outbound).
//!
//! # Example
//!
//! ```
//! use gomoku::{Game, Stone};
//!
//! let mut game = Game::new(5).unwrap();
//! assert!(game.apply_move(3, 3));
//! assert_eq!(game.current_player(), Stone::White);
//! assert!(!game.apply_move(3, 3)); // occupied
//! ```

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone, WIN_LENGTH};
use crate::error::GomokuError;
use crate::rules::find_five_positions;

/// A move in 1-based board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Lossless because board sizes are capped at [`MAX_BOARD_SIZE`](crate::board::MAX_BOARD_SIZE)
impl From<Pos> for Move {
    fn from(pos: Pos) -> Self {
        Self {
            row: pos.row as i32 + 1,
            col: pos.col as i32 + 1,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    Drawn,
}

/// A single game of Gomoku
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Stone,
    game_over: bool,
    winner: Option<Stone>,
    winning_line: Option<[Pos; WIN_LENGTH]>,
    last_move: Option<Move>,
    move_count: usize,
}

impl Game {
    /// Start a game on a `size` x `size` board with Black to move
    pub fn new(size: usize) -> Result<Self, GomokuError> {
        Ok(Self::with_board(Board::new(size)?))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            current_player: Stone::Black,
            game_over: false,
            winner: None,
            winning_line: None,
            last_move: None,
            move_count: 0,
        }
    }

    /// Play the current player's stone at 1-based `(row, col)`
    ///
    /// Returns `true` whenever a stone was placed, including the move that
    /// ends the game. Returns `false` without changing anything if the game
    /// is over or the cell is occupied or off the board.
    pub fn apply_move(&mut self, row: i32, col: i32) -> bool {
        let (r, c) = (row.saturating_sub(1), col.saturating_sub(1));
        if self.game_over || !self.board.is_legal_move(r, c) {
            return false;
        }

        let color = self.current_player;
        // Bounds and emptiness were checked by is_legal_move
        match self.board.place_stone(Pos::new(r as usize, c as usize), color) {
            Ok(true) => {}
            Ok(false) | Err(_) => return false,
        }

        let mv = Move::new(row, col);
        self.last_move = Some(mv);
        self.move_count += 1;
        debug!(?color, %mv, move_count = self.move_count, "stone placed");

        if let Some(line) = find_five_positions(&self.board, color) {
            self.game_over = true;
            self.winner = Some(color);
            self.winning_line = Some(line);
            info!(?color, moves = self.move_count, "game won");
            return true;
        }

        if self.board.is_full() {
            self.game_over = true;
            info!(moves = self.move_count, "game drawn");
            return true;
        }

        self.current_player = color.opponent();
        true
    }

    /// [`Game::apply_move`] for a [`Move`]
    #[inline]
    pub fn play(&mut self, mv: Move) -> bool {
        self.apply_move(mv.row, mv.col)
    }

    /// Every empty cell, 1-based, in row-major order
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.empty_cells().map(Move::from).collect()
    }

    /// Pick one of [`Game::legal_moves`] uniformly at random
    ///
    /// Does not play the move. Returns `None` when the board has no empty cell.
    pub fn select_random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        self.legal_moves().choose(rng).copied()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Winning color; `None` while playing and after a draw
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(stone)) => GameStatus::Won(stone),
            (true, None) => GameStatus::Drawn,
        }
    }

    /// The five stones that decided the game (0-based)
    pub fn winning_line(&self) -> Option<[Pos; WIN_LENGTH]> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_state() {
        let game = Game::new(5).unwrap();
        assert_eq!(game.current_player(), Stone::Black);
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.legal_moves().len(), 25);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_default_game_is_8x8() {
        let game = Game::default();
        assert_eq!(game.board().size(), 8);
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_too_small() {
        assert!(matches!(
            Game::new(4),
            Err(GomokuError::InvalidBoardSize { size: 4, .. })
        ));
    }

    #[test]
    fn test_player_moves() {
        let mut game = Game::new(5).unwrap();

        assert!(game.apply_move(1, 1));
        assert_eq!(game.current_player(), Stone::White);
        assert_eq!(game.board().get(Pos::new(0, 0)), Ok(Stone::Black));

        assert!(game.apply_move(1, 2));
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.board().get(Pos::new(0, 1)), Ok(Stone::White));

        // Occupied
        assert!(!game.apply_move(1, 1));
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.last_move(), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = Game::new(5).unwrap();
        for (row, col) in [(-1, 1), (0, 1), (1, 0), (6, 1), (1, 6), (i32::MIN, i32::MAX)] {
            assert!(!game.apply_move(row, col), "({row}, {col})");
        }
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.board().stone_count(), 0);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_win_detection() {
        let mut game = Game::new(5).unwrap();
        for col in 1..=5 {
            assert!(game.apply_move(1, col));
            if col < 5 {
                assert!(game.apply_move(2, col));
            }
        }

        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Stone::Black));
        assert_eq!(game.status(), GameStatus::Won(Stone::Black));
        assert_eq!(
            game.winning_line(),
            Some([0, 1, 2, 3, 4].map(|c| Pos::new(0, c)))
        );
        // Winner stays the current player
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::new(5).unwrap();
        for col in 1..=5 {
            game.apply_move(col, 1);
            if col < 5 {
                game.apply_move(col, 2);
            }
        }
        assert!(game.is_over());

        let board = game.board().clone();
        let player = game.current_player();
        for _ in 0..3 {
            assert!(!game.apply_move(5, 5));
            assert!(!game.apply_move(3, 3));
        }
        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player(), player);
        assert_eq!(game.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_legal_moves_row_major_one_based() {
        let mut game = Game::new(5).unwrap();
        game.apply_move(1, 1);
        game.apply_move(1, 3);

        let moves = game.legal_moves();
        assert_eq!(moves.len(), 23);
        assert_eq!(&moves[..3], &[Move::new(1, 2), Move::new(1, 4), Move::new(1, 5)]);
        assert_eq!(moves.last(), Some(&Move::new(5, 5)));
    }

    #[test]
    fn test_select_random_move_is_legal_and_pure() {
        let mut game = Game::new(5).unwrap();
        game.apply_move(3, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let legal = game.legal_moves();

        for _ in 0..100 {
            let mv = game.select_random_move(&mut rng).unwrap();
            assert!(legal.contains(&mv), "{mv} is not legal");
        }
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_select_random_move_reproducible() {
        let game = Game::new(8).unwrap();
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| game.select_random_move(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| game.select_random_move(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_random_move_covers_all_cells() {
        let game = Game::new(5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(game.select_random_move(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), 25);
    }

    #[test]
    fn test_move_from_pos() {
        assert_eq!(Move::from(Pos::new(0, 0)), Move::new(1, 1));
        assert_eq!(Move::from(Pos::new(4, 2)), Move::new(5, 3));
        assert_eq!(Move::new(4, 5).to_string(), "4,5");
    }
}
