//! Command-line interface for the tic-tac-toe board.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-Tac-Toe - two players take turns marking a 3x3 grid
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Frontend to run (defaults to the window)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available frontends
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the board in a native window
    Gui,

    /// Play in the terminal (mouse or keyboard)
    Tui {
        /// File to write logs to while the terminal is in use
        #[arg(long, default_value = "tictactoe_tui.log")]
        log_file: PathBuf,
    },
}

impl Cli {
    /// Returns the chosen frontend, falling back to the window.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Gui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_gui() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command(), Command::Gui);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_tui_default_log_file() {
        let cli = Cli::try_parse_from(["tictactoe", "tui"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Tui {
                log_file: PathBuf::from("tictactoe_tui.log")
            }
        );
    }

    #[test]
    fn test_config_after_subcommand() {
        let cli = Cli::try_parse_from(["tictactoe", "tui", "--config", "board.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
    }
}
