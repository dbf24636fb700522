//! Core domain types for the tic-tac-toe board.

use super::Position;
use std::fmt;
use tracing::instrument;

/// Mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mark {
    /// Player X (always moves first).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a player's mark for the rest of the session.
    Occupied(Mark),
}

impl Square {
    /// Text a frontend shows for this cell.
    pub fn text(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Mark::X) => "X",
            Square::Occupied(Mark::O) => "O",
        }
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Which player moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnIndicator {
    /// X places the next mark.
    #[default]
    XToMove,
    /// O places the next mark.
    OToMove,
}

impl TurnIndicator {
    /// Mark placed by the next successful activation.
    pub fn mark(self) -> Mark {
        match self {
            TurnIndicator::XToMove => Mark::X,
            TurnIndicator::OToMove => Mark::O,
        }
    }

    /// Returns the indicator for the other player.
    pub fn flip(self) -> Self {
        match self {
            TurnIndicator::XToMove => TurnIndicator::OToMove,
            TurnIndicator::OToMove => TurnIndicator::XToMove,
        }
    }

    /// Label text shown above the grid.
    pub fn label(self) -> &'static str {
        match self {
            TurnIndicator::XToMove => "Current Player: X",
            TurnIndicator::OToMove => "Current Player: O",
        }
    }
}

impl From<Mark> for TurnIndicator {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => TurnIndicator::XToMove,
            Mark::O => TurnIndicator::OToMove,
        }
    }
}

/// Result of activating a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The cell was empty and now holds this mark.
    Placed(Mark),
    /// The cell was already occupied; nothing changed.
    Ignored,
}

impl Activation {
    /// Whether the activation changed the board.
    pub fn is_placed(self) -> bool {
        matches!(self, Activation::Placed(_))
    }
}

/// 3x3 board plus the turn indicator.
///
/// Cells only ever go from [`Square::Empty`] to [`Square::Occupied`], and the
/// indicator flips exactly once per placement. There is no terminal state:
/// once all nine cells are filled, every activation is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    pub(crate) squares: [Square; 9],
    pub(crate) turn: TurnIndicator,
    /// Positions placed so far, in order.
    pub(crate) history: Vec<Position>,
}

impl Board {
    /// Creates an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_row_col(row, col).ok().map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the turn indicator.
    pub fn turn(&self) -> TurnIndicator {
        self.turn
    }

    /// Returns the positions placed so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Positions still open, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Places the current player's mark at `pos` if that cell is empty.
    ///
    /// Occupied cells are left alone and the call reports
    /// [`Activation::Ignored`]; this is not an error.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn activate(&mut self, pos: Position) -> Activation {
        if !self.is_empty(pos) {
            tracing::debug!(position = %pos, "Cell already occupied, ignoring activation");
            return Activation::Ignored;
        }

        let mark = self.turn.mark();
        self.squares[pos.to_index()] = Square::Occupied(mark);
        self.history.push(pos);
        self.turn = self.turn.flip();

        #[cfg(debug_assertions)]
        {
            use super::invariants::{BoardInvariants, InvariantSet};
            let checked = BoardInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Board invariants violated: {:?}", checked);
        }

        tracing::info!(position = %pos, %mark, "Mark placed");
        Activation::Placed(mark)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_with_x_to_move() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.turn(), TurnIndicator::XToMove);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_turn_indicator_labels() {
        assert_eq!(TurnIndicator::XToMove.label(), "Current Player: X");
        assert_eq!(TurnIndicator::OToMove.label(), "Current Player: O");
        assert_eq!(TurnIndicator::XToMove.flip(), TurnIndicator::OToMove);
        assert_eq!(TurnIndicator::from(Mark::O), TurnIndicator::OToMove);
    }

    #[test]
    fn test_square_text() {
        assert_eq!(Square::Empty.text(), "");
        assert_eq!(Square::Occupied(Mark::X).text(), "X");
        assert_eq!(Square::Occupied(Mark::O).text(), "O");
    }

    #[test]
    fn test_display_renders_rows() {
        let mut board = Board::new();
        board.activate(Position::TopLeft);
        board.activate(Position::Center);
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(2, 2), Some(Square::Empty));
    }
}
