//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are separated from the
//! controller so they can be checked and tested on bare boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, evaluate};
