//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square, Verdict, WinLine};
use super::draw::is_full;
use tracing::instrument;

/// The eight winning lines in evaluation order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the player and line of the first line in [`LINES`] order
/// holding three identical marks, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Derives the verdict for a board.
///
/// A winner takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((player, line)) = check_winner(board) {
        Verdict::Winner { player, line }
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::None
    }
}
