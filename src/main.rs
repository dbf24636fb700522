//! Tic-Tac-Toe - unified CLI
//!
//! Opens the board in a window by default, or in the terminal with `tui`.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Command, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command();

    // The terminal frontend installs its own file logger.
    if command == Command::Gui {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match command {
        Command::Gui => {
            info!("Starting window frontend");
            tictactoe::run_gui(&settings)
        }
        Command::Tui { log_file } => tictactoe::run_tui(&settings, &log_file),
    }
}
