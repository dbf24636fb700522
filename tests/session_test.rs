//! Tests for a board session driven the way the frontends drive it.

use tictactoe::{Activation, ActivationEvent, Mark, Position, Session, TurnIndicator};

#[test]
fn test_session_starts_with_x_label() {
    let session = Session::new();
    assert_eq!(session.turn(), TurnIndicator::XToMove);
    assert_eq!(session.turn_label(), "Current Player: X");
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(session.cell_text(row, col), "");
        }
    }
}

#[test]
fn test_clicks_by_coordinates() {
    let mut session = Session::new();
    let click = |row, col| ActivationEvent::at(row, col).expect("cell inside grid");

    assert_eq!(session.dispatch(click(0, 0)), Activation::Placed(Mark::X));
    assert_eq!(session.turn_label(), "Current Player: O");

    assert_eq!(session.dispatch(click(0, 0)), Activation::Ignored);
    assert_eq!(session.cell_text(0, 0), "X");
    assert_eq!(session.turn_label(), "Current Player: O");

    assert_eq!(session.dispatch(click(1, 1)), Activation::Placed(Mark::O));
    assert_eq!(session.cell_text(1, 1), "O");
    assert_eq!(session.turn_label(), "Current Player: X");
}

#[test]
fn test_session_never_ends() {
    let mut session = Session::new();
    for pos in Position::ALL {
        session.dispatch(pos.into());
    }
    assert_eq!(session.placed(), 9);
    assert!(session.board().is_full());

    for pos in Position::ALL {
        assert_eq!(session.dispatch(pos.into()), Activation::Ignored);
    }
    assert_eq!(session.ignored(), 9);
    assert_eq!(session.turn_label(), "Current Player: O");
}
