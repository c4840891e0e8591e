//! Strictly Tic-Tac-Toe library - a terminal tic-tac-toe game
//!
//! Two players share one terminal. The board evaluator and the game
//! controller are plain synchronous Rust; the terminal UI drives them one
//! event at a time.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (winner with winning line, draw)
//! - **Game**: turn-management state machine with move count and reset
//! - **Theme**: light/dark display palette, independent of game state
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: ratatui rendering and crossterm input
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.accept_move(index).unwrap();
//! }
//!
//! match game.status() {
//!     GameStatus::Won { winner, line } => {
//!         assert_eq!(winner, Player::X);
//!         assert_eq!(line.indices(), [0, 1, 2]);
//!     }
//!     other => panic!("unexpected status {:?}", other),
//! }
//! assert_eq!(game.status_text(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod theme;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE};

// Crate-level exports - Theme
pub use theme::{Palette, Theme};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, MAX_MOVES, Mark, MoveError, Player, Position, Square, Verdict,
    WinLine, invariants, rules,
};
