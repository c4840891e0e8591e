//! Move rejection reasons for tic-tac-toe.
//!
//! A rejected move never changes game state. The error only says why.

use super::{Player, Position};

/// Error returned when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square (valid range is 0-8).
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied by {}", _0, _1)]
    SquareOccupied(Position, Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
