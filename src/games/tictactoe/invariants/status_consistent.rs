//! Status consistency invariant: the stored status agrees with the board.

use super::super::{Game, GameStatus, Verdict, rules};
use super::Invariant;

/// Invariant: the game status is what the evaluator derives from the board.
///
/// A winning line means `Won` with that winner and line, a full board
/// without one means `Draw`, anything else means `InProgress`.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let expected = match rules::evaluate(game.board()) {
            Verdict::None => GameStatus::InProgress,
            Verdict::Winner { player, line } => GameStatus::Won {
                winner: player,
                line,
            },
            Verdict::Draw => GameStatus::Draw,
        };

        game.status() == expected
    }

    fn description() -> &'static str {
        "Game status matches the board's verdict"
    }
}
