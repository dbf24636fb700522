//! Turn and occupancy state machine for a two-player tic-tac-toe board.
//!
//! A [`Board`] holds nine cells and a [`TurnIndicator`]. Activating an empty
//! cell writes the current player's mark and flips the indicator; activating
//! an occupied cell does nothing. There is no win or draw detection and no
//! terminal state.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{handle, ActivationEvent, Board, Mark, Position, Square, TurnIndicator};
//!
//! let board = Board::new();
//! let board = handle(&board, ActivationEvent::new(Position::TopLeft));
//! assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
//! assert_eq!(board.turn(), TurnIndicator::OToMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod handler;
pub mod invariants;
mod position;
mod types;

pub use handler::{handle, handle_in_place, ActivationEvent};
pub use invariants::{
    AlternatingTurnInvariant, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant,
};
pub use position::{Position, PositionError};
pub use types::{Activation, Board, Mark, Square, TurnIndicator};
