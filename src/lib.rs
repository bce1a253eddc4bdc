//! Go-Moku against a random-move computer opponent
//!
//! Two players take turns placing stones on a square board (at least 5x5).
//! The first to get five or more stones in a straight line, horizontally,
//! vertically or diagonally, wins. A full board without such a line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Grid storage, bounds checks and move legality (0-based)
//! - [`rules`]: Five-in-a-row detection
//! - [`game`]: Turn order and game-over detection (1-based moves)
//! - [`engine`]: Move policies for the computer player
//! - [`config`]: TOML configuration
//! - [`ui`]: Console rendering, input parsing and the interactive loop
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, MovePolicy, RandomEngine, Stone};
//!
//! let mut game = Game::new(8).unwrap();
//! let mut engine = RandomEngine::seeded(Stone::White, 1);
//!
//! // Human (Black) moves, then the engine answers
//! assert!(game.apply_move(4, 5));
//! if let Some(mv) = engine.play(&mut game) {
//!     println!("AI plays {mv}");
//! }
//! assert_eq!(game.current_player(), Stone::Black);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{MovePolicy, RandomEngine};
pub use error::{ConfigError, GomokuError};
pub use game::{Game, GameStatus, Move};
