//! Strictly Tic-Tac-Toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_tictactoe::{AppConfig, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.theme, cli.first, cli.log_file);

    tui::init_logging(config.log_file())?;
    info!(config = ?config, "Configuration resolved");

    tui::run(&config)
}
