//! Tests for the turn/occupancy state machine.

use strum::IntoEnumIterator;
use tictactoe_board::{
    handle, Activation, ActivationEvent, Board, Mark, Position, Square, TurnIndicator,
};

fn at(row: usize, col: usize) -> ActivationEvent {
    ActivationEvent::at(row, col).expect("coordinates inside the grid")
}

#[test]
fn test_first_activation_anywhere_places_x() {
    for pos in Position::iter() {
        let board = handle(&Board::new(), pos.into());
        assert_eq!(board.get(pos), Square::Occupied(Mark::X));
        assert_eq!(board.turn(), TurnIndicator::OToMove);

        let changed = board.squares().iter().filter(|s| **s != Square::Empty).count();
        assert_eq!(changed, 1);
    }
}

#[test]
fn test_empty_cell_takes_mark_of_current_turn() {
    // Put the board in O-to-move, then try every remaining cell.
    let start = handle(&Board::new(), Position::TopLeft.into());

    for pos in start.empty_positions() {
        let next = handle(&start, pos.into());
        assert_eq!(next.get(pos), Square::Occupied(start.turn().mark()));
        assert_eq!(next.turn(), start.turn().flip());
    }
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut board = Board::new();
    board.activate(Position::Center);
    board.activate(Position::TopLeft);

    for pos in [Position::Center, Position::TopLeft] {
        let before = board.clone();
        assert_eq!(board.activate(pos), Activation::Ignored);
        assert_eq!(board, before);
    }
}

#[test]
fn test_documented_sequence() {
    let board = Board::new();

    let board = handle(&board, at(0, 0));
    assert_eq!(board.cell(0, 0), Some(Square::Occupied(Mark::X)));
    assert_eq!(board.turn(), TurnIndicator::OToMove);

    let board = handle(&board, at(0, 0));
    assert_eq!(board.cell(0, 0), Some(Square::Occupied(Mark::X)));
    assert_eq!(board.turn(), TurnIndicator::OToMove);

    let board = handle(&board, at(1, 1));
    assert_eq!(board.cell(1, 1), Some(Square::Occupied(Mark::O)));
    assert_eq!(board.turn(), TurnIndicator::XToMove);

    let board = handle(&board, at(0, 1));
    assert_eq!(board.cell(0, 1), Some(Square::Occupied(Mark::X)));
    assert_eq!(board.turn(), TurnIndicator::OToMove);
}

#[test]
fn test_repeated_activation_is_idempotent() {
    let once = handle(&Board::new(), Position::BottomRight.into());
    let mut repeated = once.clone();
    for _ in 0..5 {
        repeated = handle(&repeated, Position::BottomRight.into());
        assert_eq!(repeated, once);
    }
}

#[test]
fn test_row_major_fill_alternates_marks() {
    let mut board = Board::new();
    for pos in Position::ALL {
        assert!(board.activate(pos).is_placed());
    }

    let marks: String = board.squares().iter().map(|s| s.text()).collect();
    assert_eq!(marks, "XOXOXOXOX");
    assert!(board.is_full());
    // Nine placements: X made the last one, so O is indicated next.
    assert_eq!(board.turn(), TurnIndicator::OToMove);
    assert_eq!(board.history(), &Position::ALL);
}

#[test]
fn test_full_board_ignores_every_activation() {
    let mut board = Board::new();
    for pos in Position::ALL {
        board.activate(pos);
    }
    let full = board.clone();

    for pos in Position::iter() {
        assert_eq!(board.activate(pos), Activation::Ignored);
    }
    assert_eq!(board, full);
}
