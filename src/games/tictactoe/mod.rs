mod action;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::MoveError;
pub use game::{Game, GameStatus, MAX_MOVES};
pub use position::Position;
pub use types::{Board, Player, Square, Verdict, WinLine};

/// The symbol a player places; the player and their mark are one type.
pub type Mark = Player;
