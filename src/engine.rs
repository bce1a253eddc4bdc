//! Computer opponent
//!
//! The opponent is any [`MovePolicy`]. The only built-in policy is
//! [`RandomEngine`], which picks uniformly among the empty cells; there is no
//! evaluation or look-ahead.
//!
//! # Example
//!
//! ```
//! use gomoku::{Game, MovePolicy, RandomEngine, Stone};
//!
//! let mut game = Game::new(5).unwrap();
//! let mut engine = RandomEngine::seeded(Stone::White, 7);
//!
//! // Not White's turn yet
//! assert_eq!(engine.play(&mut game), None);
//!
//! game.apply_move(3, 3);
//! let mv = engine.play(&mut game).unwrap();
//! assert_ne!(mv, gomoku::Move::new(3, 3));
//! assert_eq!(game.current_player(), Stone::Black);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::Stone;
use crate::game::{Game, Move};

/// Something that can choose moves for one color
pub trait MovePolicy {
    /// Color this policy plays
    fn stone(&self) -> Stone;

    /// Choose a move for the current position without playing it
    fn select_move(&mut self, game: &Game) -> Option<Move>;

    /// Display name
    fn name(&self) -> &str;

    /// Choose and play a move, if it is this policy's turn and the game is running
    ///
    /// Returns the move that was played.
    fn play(&mut self, game: &mut Game) -> Option<Move> {
        if game.is_over() || game.current_player() != self.stone() {
            return None;
        }
        let mv = self.select_move(game)?;
        game.play(mv).then_some(mv)
    }
}

/// Opponent that plays a uniformly random empty cell
#[derive(Debug, Clone)]
pub struct RandomEngine<R = StdRng> {
    stone: Stone,
    rng: R,
}

impl<R: Rng> RandomEngine<R> {
    /// Engine for `stone` drawing from `rng`
    pub fn new(stone: Stone, rng: R) -> Self {
        Self { stone, rng }
    }
}

impl RandomEngine<StdRng> {
    /// Reproducible engine
    pub fn seeded(stone: Stone, seed: u64) -> Self {
        Self::new(stone, StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from OS entropy
    pub fn from_entropy(stone: Stone) -> Self {
        Self::new(stone, StdRng::from_entropy())
    }
}

impl<R: Rng> MovePolicy for RandomEngine<R> {
    fn stone(&self) -> Stone {
        self.stone
    }

    fn select_move(&mut self, game: &Game) -> Option<Move> {
        let mv = game.select_random_move(&mut self.rng);
        debug!(stone = ?self.stone, mv = ?mv, "random move selected");
        mv
    }

    fn name(&self) -> &str {
        "Random"
    }
}
