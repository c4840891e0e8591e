//! Keyboard and mouse input mapping.

use crate::games::tictactoe::Position;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position as ScreenPosition;
use tracing::{instrument, trace};

use super::ui::Regions;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A user intent, decoded from a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at a specific cell.
    Place(Position),
    /// Play at the cell under the cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Start a new game.
    Reset,
    /// Switch between light and dark themes.
    ToggleTheme,
    /// Leave the application.
    Quit,
}

/// Decodes a terminal event into an action.
///
/// Key releases, unbound keys and clicks outside any control yield `None`.
#[instrument(skip(regions))]
pub fn action_for_event(event: &Event, regions: &Regions) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Mouse(mouse) => action_for_mouse(mouse, regions),
        _ => None,
    }
}

/// Maps a key press to an action.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Reset,
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTheme,
        KeyCode::Char(c @ '1'..='9') => {
            Action::Place(Position::from_cell_number(&c.to_string())?)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Direction::Right),
        _ => return None,
    };

    trace!(?action, "Decoded key");
    Some(action)
}

/// Maps a left click on a cell or button to an action.
pub fn action_for_mouse(mouse: &MouseEvent, regions: &Regions) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let at = ScreenPosition::new(mouse.column, mouse.row);

    if let Some(pos) = Position::ALL
        .into_iter()
        .find(|pos| regions.cells[pos.to_index()].contains(at))
    {
        return Some(Action::Place(pos));
    }
    if regions.reset.contains(at) {
        return Some(Action::Reset);
    }
    if regions.theme.contains(at) {
        return Some(Action::ToggleTheme);
    }
    None
}

/// Moves the cursor one cell, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_select_cells() {
        assert_eq!(
            action_for_key(&press(KeyCode::Char('1'))),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(&press(KeyCode::Char('5'))),
            Some(Action::Place(Position::Center))
        );
        assert_eq!(action_for_key(&press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key(&press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(
            action_for_key(&press(KeyCode::Char('t'))),
            Some(Action::ToggleTheme)
        );
        assert_eq!(action_for_key(&press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('r'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(&key), None);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_click_hits_cells_and_buttons() {
        let mut regions = Regions::default();
        regions.cells[4] = Rect::new(10, 10, 5, 3);
        regions.reset = Rect::new(0, 20, 9, 1);
        regions.theme = Rect::new(12, 20, 9, 1);

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(
            action_for_mouse(&click(11, 11), &regions),
            Some(Action::Place(Position::Center))
        );
        assert_eq!(action_for_mouse(&click(3, 20), &regions), Some(Action::Reset));
        assert_eq!(
            action_for_mouse(&click(15, 20), &regions),
            Some(Action::ToggleTheme)
        );
        assert_eq!(action_for_mouse(&click(50, 50), &regions), None);
    }
}
