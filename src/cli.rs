//! Command-line interface for strictly_tictactoe.

use clap::Parser;
use std::path::PathBuf;
use strictly_tictactoe::{DEFAULT_CONFIG_FILE, Player, Theme};

/// Strictly Tic-Tac-Toe - two players, one terminal, light or dark
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Terminal tic-tac-toe with a light/dark theme toggle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Theme to start with: light or dark
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Player who moves first: x or o
    #[arg(short, long)]
    pub first: Option<Player>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
