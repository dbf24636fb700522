//! Terminal frontend.
//!
//! Renders the same surface as the window (current-player label over a 3x3
//! grid) with ratatui and feeds mouse clicks and key presses into the session.

mod input;
mod ui;

pub use input::{map_key, map_mouse, move_cursor, Command};
pub use ui::{draw, BoardLayout};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::{io, path::Path, time::Duration};
use tictactoe_board::Position;
use tracing::{debug, error, info, instrument, warn};

use crate::{Session, Settings};

/// Runs the terminal frontend until the user quits.
///
/// Logs go to `log_file` so they do not interfere with the screen.
#[instrument(skip(settings), fields(log_file = %log_file.display()))]
pub fn run_tui(settings: &Settings, log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting terminal frontend");

    enable_raw_mode()?;
    let guard = TerminalGuard;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_board(&mut terminal, settings.window().title());
    drop(terminal);
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Board loop error");
    }
    res?;
    restored.context("Failed to restore terminal")
}

/// Restores the terminal on drop, including early returns during setup.
struct TerminalGuard;

impl TerminalGuard {
    /// Restores now and reports the first failure.
    fn restore(self) -> io::Result<()> {
        let res = restore_terminal();
        std::mem::forget(self);
        res
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Runs every restore step, even after one fails.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_failure([
        ("raw mode", disable_raw_mode()),
        (
            "alternate screen",
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture),
        ),
        ("cursor", execute!(stdout, Show)),
    ])
}

/// Logs each failed step and returns the earliest error.
fn first_failure<const N: usize>(steps: [(&str, io::Result<()>); N]) -> io::Result<()> {
    let mut first = Ok(());
    for (step, res) in steps {
        if let Err(err) = res {
            warn!(step, error = %err, "Terminal restore step failed");
            if first.is_ok() {
                first = Err(err);
            }
        }
    }
    first
}

/// Draw/poll loop over one session.
#[instrument(skip(terminal))]
fn run_board<B: Backend>(terminal: &mut Terminal<B>, title: &str) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut session = Session::new();
    let mut cursor = Position::Center;

    loop {
        terminal.draw(|f| draw(f, &session, cursor, title))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let command = match event::read()? {
            Event::Key(key) => map_key(cursor, key),
            Event::Mouse(mouse) => {
                let layout = BoardLayout::new(terminal.get_frame().area());
                map_mouse(&layout, mouse)
            }
            _ => Command::Ignore,
        };

        match command {
            Command::Activate(event) => {
                cursor = event.position;
                session.dispatch(event);
            }
            Command::MoveCursor(pos) => cursor = pos,
            Command::Quit => {
                info!(
                    placed = session.placed(),
                    ignored = session.ignored(),
                    "User quit"
                );
                return Ok(());
            }
            Command::Ignore => debug!("Input ignored"),
        }
    }
}
