//! Application state and logic.

use crate::config::AppConfig;
use crate::games::tictactoe::{Game, GameStatus, Position, Square};
use crate::theme::Theme;
use tracing::{debug, info, instrument};

use super::input::{Action, move_cursor};

/// Main application state: one game session plus display state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    theme: Theme,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: Game::with_first_player(*config.first_player()),
            theme: *config.theme(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Gets the cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> String {
        self.game.status_text()
    }

    /// Accessible description of a cell, e.g. "Center, X, winning line".
    pub fn cell_label(&self, pos: Position) -> String {
        let content = match self.game.board().get(pos) {
            Square::Empty => "empty".to_string(),
            Square::Occupied(player) => player.to_string(),
        };
        let on_line = matches!(
            self.game.status(),
            GameStatus::Won { line, .. } if line.contains(pos)
        );

        if on_line {
            format!("{}, {}, winning line", pos.label(), content)
        } else {
            format!("{}, {}", pos.label(), content)
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::PlaceAtCursor => self.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Reset => self.restart(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Plays at `pos`, ignoring rejected moves.
    fn play(&mut self, pos: Position) {
        match self.game.place(pos) {
            Ok(status) => debug!(position = %pos, ?status, "Move applied"),
            Err(e) => debug!(position = %pos, error = %e, "Ignoring rejected move"),
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.reset();
        self.cursor = Position::Center;
    }

    /// Switches between light and dark themes.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        info!(theme = %self.theme, "Theme changed");
    }
}
