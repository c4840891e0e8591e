//! Rendering tests against ratatui's in-memory backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use strictly_tictactoe::tui::{self, Action, App};
use strictly_tictactoe::{AppConfig, Player, Position, Square, Theme};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    terminal.draw(|f| tui::draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn click(pos: (u16, u16)) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: pos.0,
        row: pos.1,
        modifiers: KeyModifiers::NONE,
    })
}

fn center_of(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

#[test]
fn test_initial_screen_shows_turn_and_numbers() {
    let app = App::new(&AppConfig::default());
    let buffer = render(&app);
    let text = screen_text(&buffer);

    assert!(text.contains("Strictly Tic-Tac-Toe"));
    assert!(text.contains("Turn: X"));
    assert!(text.contains("[ Reset ]"));
    assert!(text.contains("[ Theme: dark ]"));
    assert!(text.contains("Center, empty"));

    let regions = tui::layout(Rect::new(0, 0, WIDTH, HEIGHT));
    for pos in Position::ALL {
        let (x, y) = center_of(regions.cells[pos.to_index()]);
        let expected = (pos.to_index() + 1).to_string();
        assert_eq!(
            buffer.cell((x, y)).expect("cell").symbol(),
            expected,
            "{} should show its number",
            pos
        );
    }
}

#[test]
fn test_status_tracks_each_move() {
    let mut app = App::new(&AppConfig::default());

    app.handle(Action::Place(Position::TopLeft));
    assert!(screen_text(&render(&app)).contains("Turn: O"));

    for pos in [Position::MiddleLeft, Position::TopCenter, Position::Center, Position::TopRight] {
        app.handle(Action::Place(pos));
    }
    let text = screen_text(&render(&app));
    assert!(text.contains("Winner: X"));
    assert!(text.contains("Top right, X, winning line"));

    app.handle(Action::Reset);
    assert!(screen_text(&render(&app)).contains("Turn: X"));
}

#[test]
fn test_draw_is_announced() {
    let mut app = App::new(&AppConfig::default());
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        app.handle(Action::Place(Position::ALL[index]));
    }
    assert!(screen_text(&render(&app)).contains("Draw!"));
}

#[test]
fn test_theme_toggle_repaints_background() {
    let mut app = App::new(&AppConfig::default());
    let light = render(&app);
    assert_eq!(
        light.cell((0, HEIGHT - 1)).expect("cell").bg,
        Theme::Light.palette().background
    );

    app.handle(Action::ToggleTheme);
    let dark = render(&app);
    assert_eq!(
        dark.cell((0, HEIGHT - 1)).expect("cell").bg,
        Theme::Dark.palette().background
    );
    assert!(screen_text(&dark).contains("[ Theme: light ]"));
}

#[test]
fn test_mouse_click_plays_cell() {
    let mut app = App::new(&AppConfig::default());
    let regions = tui::layout(Rect::new(0, 0, WIDTH, HEIGHT));

    let event = click(center_of(regions.cells[Position::BottomLeft.to_index()]));
    let action = tui::action_for_event(&event, &regions).expect("click on a cell");
    app.handle(action);

    assert_eq!(
        app.game().board().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_mouse_buttons_reset_and_toggle() {
    let mut app = App::new(&AppConfig::default());
    let regions = tui::layout(Rect::new(0, 0, WIDTH, HEIGHT));
    app.handle(Action::Place(Position::Center));

    let toggle = tui::action_for_event(&click(center_of(regions.theme)), &regions);
    assert_eq!(toggle, Some(Action::ToggleTheme));
    app.handle(Action::ToggleTheme);
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(app.game().move_count(), 1);

    let reset = tui::action_for_event(&click(center_of(regions.reset)), &regions);
    assert_eq!(reset, Some(Action::Reset));
    app.handle(Action::Reset);
    assert_eq!(app.game().move_count(), 0);
    assert_eq!(app.theme(), Theme::Dark);
}

#[test]
fn test_keyboard_round() {
    let mut app = App::new(&AppConfig::default().with_overrides(None, Some(Player::O), None));
    let regions = tui::layout(Rect::new(0, 0, WIDTH, HEIGHT));

    for code in [KeyCode::Char('5'), KeyCode::Up, KeyCode::Enter, KeyCode::Char('q')] {
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        if let Some(action) = tui::action_for_event(&event, &regions) {
            app.handle(action);
        }
    }

    assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(app.game().board().get(Position::TopCenter), Square::Occupied(Player::X));
    assert!(app.should_quit());
}

#[test]
fn test_finished_board_hides_cell_numbers() {
    let mut app = App::new(&AppConfig::default());
    for index in [0, 3, 1, 4, 2] {
        app.handle(Action::Place(Position::ALL[index]));
    }
    let buffer = render(&app);
    let regions = tui::layout(Rect::new(0, 0, WIDTH, HEIGHT));

    // Bottom row stays empty and is no longer clickable, so no number is drawn.
    let (x, y) = center_of(regions.cells[Position::BottomRight.to_index()]);
    assert_eq!(buffer.cell((x, y)).expect("cell").symbol(), " ");
}
