//! Named board positions and coordinate conversion.

use derive_more::{Display, Error};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Every value is a valid cell, so activation never has to bounds-check.
/// Raw `(row, col)` pairs from a frontend go through [`Position::from_row_col`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, PositionError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| PositionError::new(format!("index {} outside 0..=8", index)))
    }

    /// Creates position from `(row, col)`, each in `0..=2`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, PositionError> {
        if row > 2 || col > 2 {
            return Err(PositionError::new(format!(
                "cell ({}, {}) outside the 3x3 grid",
                row, col
            )));
        }
        Ok(Self::ALL[row * 3 + col])
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coordinates that do not name a board cell.
#[derive(Debug, Clone, Display, Error)]
#[display("Position error: {} at {}:{}", message, file, line)]
pub struct PositionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new position error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
