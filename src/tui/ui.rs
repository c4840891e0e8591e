//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{GameStatus, Player, Position, Square};
use crate::theme::Palette;

use super::app::App;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const RESET_LABEL: &str = "[ Reset ]";
const THEME_BUTTON_WIDTH: u16 = 16;

/// Screen areas that respond to mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    /// Cell areas, indexed by board position.
    pub cells: [Rect; 9],
    /// The reset button.
    pub reset: Rect,
    /// The theme toggle button.
    pub theme: Rect,
}

/// Screen areas for every widget on a frame of the given size.
#[derive(Debug, Clone, Copy)]
struct Screen {
    title: Rect,
    board: Rect,
    status: Rect,
    regions: Regions,
    help: Rect,
}

impl Screen {
    fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),         // Title
                Constraint::Min(BOARD_HEIGHT), // Board
                Constraint::Length(3),         // Status
                Constraint::Length(1),         // Buttons
                Constraint::Length(1),         // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(RESET_LABEL.len() as u16),
                Constraint::Length(3),
                Constraint::Length(THEME_BUTTON_WIDTH),
                Constraint::Fill(1),
            ])
            .split(chunks[3]);

        Self {
            title: chunks[0],
            board,
            status: chunks[2],
            regions: Regions {
                cells: cell_rects(board),
                reset: buttons[1],
                theme: buttons[3],
            },
            help: chunks[4],
        }
    }
}

/// Computes clickable regions for a frame of the given size.
///
/// Matches what [`draw`] renders into the same area.
pub fn layout(area: Rect) -> Regions {
    Screen::split(area).regions
}

/// Draws the whole screen in the app's theme.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();
    let screen = Screen::split(area);

    let background = Block::default().style(
        Style::default()
            .bg(palette.background)
            .fg(palette.foreground),
    );
    frame.render_widget(background, area);

    let title = Paragraph::new("Strictly Tic-Tac-Toe")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(title, screen.title);

    draw_board(frame, screen.board, &screen.regions, app, &palette);

    let status = Paragraph::new(app.status_message())
        .style(
            Style::default()
                .fg(palette.status)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted))
                .title("Status"),
        );
    frame.render_widget(status, screen.status);

    let button_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(RESET_LABEL).style(button_style),
        screen.regions.reset,
    );
    frame.render_widget(
        Paragraph::new(format!("[ Theme: {} ]", app.theme().toggle())).style(button_style),
        screen.regions.theme,
    );

    let help = Paragraph::new(format!(
        "{} | 1-9/Enter: play | R: reset | T: theme | Q: quit",
        app.cell_label(app.cursor())
    ))
    .style(Style::default().fg(palette.muted))
    .alignment(Alignment::Center);
    frame.render_widget(help, screen.help);
}

fn draw_board(frame: &mut Frame, area: Rect, regions: &Regions, app: &App, palette: &Palette) {
    let grid = Style::default().fg(palette.muted);

    // Horizontal rules between rows.
    for row_gap in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
        let rule = Rect::new(area.x, area.y + row_gap, area.width, 1);
        frame.render_widget(
            Paragraph::new("─".repeat(area.width as usize)).style(grid),
            rule.intersection(area),
        );
    }

    // Vertical rules between columns.
    for col_gap in [CELL_WIDTH, CELL_WIDTH * 2 + 1] {
        for row in 0..3 {
            let y = area.y + row * (CELL_HEIGHT + 1);
            let rule = Rect::new(area.x + col_gap, y, 1, CELL_HEIGHT);
            frame.render_widget(
                Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize]).style(grid),
                rule.intersection(area),
            );
        }
    }

    for pos in Position::ALL {
        draw_cell(frame, regions.cells[pos.to_index()], app, pos, palette);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, palette: &Palette) {
    let game = app.game();

    let (symbol, mut style) = match game.board().get(pos) {
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg(palette.mark_x)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(palette.mark_o)
                .add_modifier(Modifier::BOLD),
        ),
        // Only cells that accept a click show their number.
        Square::Empty if game.is_playable(pos) => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(palette.muted),
        ),
        Square::Empty => (String::new(), Style::default()),
    };

    if matches!(game.status(), GameStatus::Won { line, .. } if line.contains(pos)) {
        style = style.bg(palette.highlight);
    } else if pos == app.cursor() && !game.is_over() {
        style = style.bg(palette.cursor);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(style.bg.unwrap_or(palette.background)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn cell_rects(board: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
    })
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
