//! Terminal UI for Strictly Tic-Tac-Toe.
//!
//! One synchronous event loop: draw, block on the next terminal event,
//! apply it to the [`App`], repeat. Each event is handled to completion
//! before the next one is read.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, action_for_event, action_for_key, action_for_mouse, move_cursor};
pub use ui::{Regions, draw, layout};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Routes tracing output to `path`; the terminal belongs to the UI.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

/// Restores the terminal on drop, including on error paths.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enters raw mode, the alternate screen and mouse capture.
    ///
    /// A failure after raw mode is on restores the terminal before returning.
    #[instrument]
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore(&mut stdout);
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore(&mut io::stdout());
                return Err(e).context("Failed to create terminal");
            }
        };
        debug!("Terminal ready");
        Ok(Self { terminal })
    }

    /// The managed terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, logging failures.
fn restore<W: Write>(out: &mut W) {
    debug!("Restoring terminal");
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the game until the user quits.
#[instrument(skip(config))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!(theme = %config.theme(), first_player = %config.first_player(), "Starting Strictly Tic-Tac-Toe");

    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(config);
    let res = run_app(guard.terminal(), &mut app);
    drop(guard);

    info!(moves = app.game().move_count(), "Session ended");
    res
}

/// Draw/read/apply loop over any backend.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let area = terminal.draw(|f| draw(f, app))?.area;
        let regions = layout(area);

        let event = event::read().context("Failed to read terminal event")?;
        if let Some(action) = action_for_event(&event, &regions) {
            app.handle(action);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen_and_mouse_capture() {
        let mut out = Vec::new();
        restore(&mut out);

        let written = String::from_utf8(out).expect("escape codes are UTF-8");
        assert!(written.contains("\x1b[?1049l"), "alternate screen not left");
        assert!(written.contains("\x1b[?1000l"), "mouse capture not disabled");
    }
}
