//! Move count invariant: the counter matches the occupied squares.

use super::super::Game;
use super::Invariant;

/// Invariant: move count equals the number of non-empty squares.
///
/// Every accepted move fills exactly one square, and nothing else does.
pub struct MoveCountInvariant;

impl Invariant<Game> for MoveCountInvariant {
    fn holds(game: &Game) -> bool {
        usize::from(game.move_count()) == game.board().occupied()
    }

    fn description() -> &'static str {
        "Move count matches number of occupied squares"
    }
}
