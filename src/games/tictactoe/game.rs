//! Game controller for tic-tac-toe.
//!
//! [`Game`] owns the board, the turn indicator and the move count, and is the
//! only thing that mutates them. Every operation is applied completely or
//! rejected without touching state.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square, Verdict, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of squares; also the move count at which a game without a
/// winner is drawn.
pub const MAX_MOVES: u8 = 9;

/// Session state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and accepts moves.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// The line that won.
        line: WinLine,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game no longer accepts moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Tic-tac-toe game controller.
///
/// Deserialization goes through [`GameSnapshot`] and rejects any state that
/// breaks the game invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) first_player: Player,
    pub(crate) move_count: u8,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a new game where X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    /// Creates a new game where `first_player` moves first.
    #[instrument]
    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first_player,
            first_player,
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark is placed next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who moves first after a reset.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the number of accepted moves (0-9).
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the verdict for the current state.
    pub fn verdict(&self) -> Verdict {
        match self.status {
            GameStatus::InProgress => Verdict::None,
            GameStatus::Won { winner, line } => Verdict::Winner {
                player: winner,
                line,
            },
            GameStatus::Draw => Verdict::Draw,
        }
    }

    /// Returns true if a move at `pos` would be accepted.
    pub fn is_playable(&self, pos: Position) -> bool {
        !self.is_over() && self.board.is_empty(pos)
    }

    /// Returns the positions that would accept a move, empty once over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Status line: "Turn: X", "Winner: X" or "Draw!".
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Turn: {}", self.to_move),
            GameStatus::Won { winner, .. } => format!("Winner: {}", winner),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Accepts a move at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index past 8, otherwise the
    /// errors of [`Game::place`]. State is unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn accept_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success the turn passes to the opponent, the move count grows by
    /// one and the status becomes `Won` or `Draw` when the move ends the game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game is won or drawn and
    /// [`MoveError::SquareOccupied`] for a taken square. State is unchanged
    /// on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            debug!(status = ?self.status, "Move rejected: game over");
            return Err(MoveError::GameOver);
        }

        if let Square::Occupied(owner) = self.board.get(pos) {
            debug!(%owner, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos, owner));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.to_move = player.opponent();
        self.move_count = self.move_count.saturating_add(1);

        self.status = if let Some((winner, line)) = rules::check_winner(&self.board) {
            info!(%winner, line = ?line.indices(), "Game won");
            GameStatus::Won { winner, line }
        } else if self.move_count == MAX_MOVES {
            info!("Game drawn");
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        debug!(move_count = self.move_count, status = ?self.status, "Move accepted");
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after move"
        );

        Ok(self.status)
    }

    /// Resets to an empty board with the first player to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(first_player = %self.first_player, "Resetting game");
        *self = Self::with_first_player(self.first_player);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated game state as read from a serialized snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSnapshot {
    board: Board,
    to_move: Player,
    first_player: Player,
    move_count: u8,
    status: GameStatus,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = InvariantViolation;

    #[instrument(skip(snapshot))]
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let game = Self {
            board: snapshot.board,
            to_move: snapshot.to_move,
            first_player: snapshot.first_player,
            move_count: snapshot.move_count,
            status: snapshot.status,
        };

        GameInvariants::check_all(&game).map_err(|violations| {
            let description = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            debug!(%description, "Snapshot rejected");
            InvariantViolation::new(description)
        })?;

        Ok(game)
    }
}
