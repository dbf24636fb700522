//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Mark, Square};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Replays the move history onto an empty grid, requiring each target to be
/// empty before it is marked, and compares the result with the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<Board> for MonotonicBoardInvariant {
    fn holds(board: &Board) -> bool {
        let mut reconstructed = [Square::Empty; 9];
        let mut mark = Mark::X;

        for pos in board.history() {
            let idx = pos.to_index();
            if reconstructed[idx] != Square::Empty {
                return false;
            }
            reconstructed[idx] = Square::Occupied(mark);
            mark = mark.opponent();
        }

        reconstructed == *board.squares()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_board_holds() {
        assert!(MonotonicBoardInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_repeated_activation_holds() {
        let mut board = Board::new();
        board.activate(Position::TopLeft);
        board.activate(Position::TopLeft);
        board.activate(Position::Center);
        assert!(MonotonicBoardInvariant::holds(&board));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut board = Board::new();
        board.activate(Position::Center);
        board.squares[Position::Center.to_index()] = Square::Occupied(Mark::O);
        assert!(!MonotonicBoardInvariant::holds(&board));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut board = Board::new();
        board.activate(Position::Center);
        board.history.push(Position::Center);
        assert!(!MonotonicBoardInvariant::holds(&board));
    }
}
