//! Console front end for the Gomoku game
//!
//! All terminal I/O lives here; the game model never prints.

mod board_view;
mod console;
mod input;
mod theme;

pub use board_view::{render_board, BoardView};
pub use console::{Console, Outcome};
pub use input::{parse_command, Command, InputError};
pub use theme::symbol;
