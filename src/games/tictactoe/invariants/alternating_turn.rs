//! Alternating turn invariant: the turn flips once per accepted move.

use super::super::Game;
use super::Invariant;

/// Invariant: the player to move follows from the move count.
///
/// After an even number of moves the first player is to move, after an odd
/// number their opponent. The turn also flips on the final move of a game.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let expected = if game.move_count() % 2 == 0 {
            game.first_player()
        } else {
            game.first_player().opponent()
        };

        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with the first player"
    }
}
