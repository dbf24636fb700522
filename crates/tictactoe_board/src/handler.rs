//! Interaction handler: turns activation events into board updates.
//!
//! Frontends never touch cells directly. Whatever the input device, a click or
//! key press becomes one [`ActivationEvent`] naming the cell, and the handler
//! applies the turn-taking rule to the board it is given.

use super::{Activation, Board, Position, PositionError};
use tracing::instrument;

/// A user-triggered request to mark one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationEvent {
    /// The cell the user activated.
    pub position: Position,
}

impl ActivationEvent {
    /// Creates an event for the given position.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Creates an event from raw grid coordinates.
    #[instrument]
    pub fn at(row: usize, col: usize) -> Result<Self, PositionError> {
        Ok(Self::new(Position::from_row_col(row, col)?))
    }
}

impl From<Position> for ActivationEvent {
    fn from(position: Position) -> Self {
        Self::new(position)
    }
}

/// Applies an event to a snapshot and returns the next snapshot.
///
/// The input board is left untouched. Activating an occupied cell yields a
/// board equal to the input.
#[instrument(skip(board))]
pub fn handle(board: &Board, event: ActivationEvent) -> Board {
    let mut next = board.clone();
    next.activate(event.position);
    next
}

/// Applies an event to a board the caller owns.
#[instrument(skip(board))]
pub fn handle_in_place(board: &mut Board, event: ActivationEvent) -> Activation {
    board.activate(event.position)
}
