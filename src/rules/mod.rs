//! Game rules for Gomoku
//!
//! Only the standard win condition applies: five or more stones of one color
//! in a straight line (overlines count).

pub mod win;

pub use win::{find_five_positions, has_five_in_row};
