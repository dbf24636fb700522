//! Keyboard and mouse input mapping.
//!
//! Every raw terminal event becomes a [`Command`]. Mouse clicks and key presses
//! that name a cell both end up as [`Command::Activate`], so the session sees
//! one kind of event regardless of the device.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_board::{ActivationEvent, Position};
use tracing::instrument;

use super::ui::BoardLayout;

/// What the event loop should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Try to mark a cell.
    Activate(ActivationEvent),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Moves cursor based on arrow keys. Edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to a command.
#[instrument]
pub fn map_key(cursor: Position, key: KeyEvent) -> Command {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return Command::Ignore;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Activate(cursor.into()),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Command::MoveCursor(move_cursor(cursor, key.code))
        }
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Position::from_index(digit as usize - 1)
                .map(|pos| Command::Activate(pos.into()))
                .unwrap_or(Command::Ignore),
            _ => Command::Ignore,
        },
        _ => Command::Ignore,
    }
}

/// Maps a mouse event to a command using the last drawn layout.
#[instrument(skip(layout))]
pub fn map_mouse(layout: &BoardLayout, mouse: MouseEvent) -> Command {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .hit_test(mouse.column, mouse.row)
            .map(|pos| Command::Activate(pos.into()))
            .unwrap_or(Command::Ignore),
        _ => Command::Ignore,
    }
}
