//! Two-player tic-tac-toe board with window and terminal frontends.
//!
//! The board rules live in [`tictactoe_board`]; this crate owns a
//! [`Session`] per run and renders it.
//!
//! # Architecture
//!
//! - **Session**: the single board a frontend owns, fed through the handler
//! - **GUI**: egui window with a current-player label and nine buttons
//! - **TUI**: ratatui rendition of the same surface, mouse and keyboard driven
//! - **Config**: optional TOML window settings plus the command line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod gui;
mod session;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings, WindowSettings};

// Crate-level exports - Frontends
pub use gui::{run_gui, BoardApp};
pub use tui::run_tui;

// Crate-level exports - Session
pub use session::Session;

// Crate-level exports - Board types
pub use tictactoe_board::{
    handle, Activation, ActivationEvent, Board, Mark, Position, PositionError, Square,
    TurnIndicator,
};
