//! A single board session owned by the running frontend.

use tictactoe_board::{handle_in_place, Activation, ActivationEvent, Board, Square, TurnIndicator};
use tracing::{debug, info, instrument};

/// Board state for one run of the program.
///
/// Frontends feed every activation through [`Session::dispatch`] and read back
/// cell text and the turn label for display. The session lives as long as the
/// process and is never reset.
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
    placed: usize,
    ignored: usize,
}

impl Session {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new board session");
        Self::default()
    }

    /// Routes an activation through the handler and counts its outcome.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: ActivationEvent) -> Activation {
        let outcome = handle_in_place(&mut self.board, event);
        match outcome {
            Activation::Placed(_) => self.placed += 1,
            Activation::Ignored => self.ignored += 1,
        }
        debug!(?outcome, placed = self.placed, ignored = self.ignored, "Activation handled");
        outcome
    }

    /// Returns the current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn indicator.
    pub fn turn(&self) -> TurnIndicator {
        self.board.turn()
    }

    /// Label text for the current player.
    pub fn turn_label(&self) -> &'static str {
        self.board.turn().label()
    }

    /// Text shown in the cell at `(row, col)`; blank outside the grid.
    pub fn cell_text(&self, row: usize, col: usize) -> &'static str {
        self.board.cell(row, col).map(Square::text).unwrap_or("")
    }

    /// Number of activations that placed a mark.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Number of activations ignored because the cell was taken.
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_board::{handle, Board, Mark, Position};

    #[test]
    fn test_dispatch_counts_outcomes() {
        let mut session = Session::new();
        assert_eq!(
            session.dispatch(Position::Center.into()),
            Activation::Placed(Mark::X)
        );
        assert_eq!(session.dispatch(Position::Center.into()), Activation::Ignored);
        assert_eq!(
            session.dispatch(Position::TopLeft.into()),
            Activation::Placed(Mark::O)
        );
        assert_eq!(session.placed(), 2);
        assert_eq!(session.ignored(), 1);
    }

    #[test]
    fn test_dispatch_agrees_with_pure_handler() {
        let events = [Position::TopLeft, Position::TopLeft, Position::Center, Position::TopLeft];
        let mut session = Session::new();
        let mut expected = Board::new();

        for pos in events {
            let outcome = session.dispatch(pos.into());
            let next = handle(&expected, pos.into());
            assert_eq!(outcome.is_placed(), next != expected);
            expected = next;
            assert_eq!(session.board(), &expected);
        }
        assert_eq!(session.board().history(), &[Position::TopLeft, Position::Center]);
        assert_eq!((session.placed(), session.ignored()), (2, 2));
    }

    #[test]
    fn test_labels_follow_turn() {
        let mut session = Session::new();
        assert_eq!(session.turn_label(), "Current Player: X");
        session.dispatch(Position::BottomRight.into());
        assert_eq!(session.turn_label(), "Current Player: O");
        assert_eq!(session.cell_text(2, 2), "X");
        assert_eq!(session.cell_text(0, 0), "");
        assert_eq!(session.cell_text(5, 5), "");
    }
}
