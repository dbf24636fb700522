//! Alternating turn invariant: marks go X, O, X, O, ...

use super::Invariant;
use crate::{Board, Mark, Square, TurnIndicator};

/// Invariant: players alternate, starting with X.
///
/// The n-th placed cell holds X for even n and O for odd n, and the turn
/// indicator matches the parity of the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let marks_alternate = board.history().iter().enumerate().all(|(n, pos)| {
            let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
            board.get(*pos) == Square::Occupied(expected)
        });

        let expected_turn = if board.history().len() % 2 == 0 {
            TurnIndicator::XToMove
        } else {
            TurnIndicator::OToMove
        };

        marks_alternate && board.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
