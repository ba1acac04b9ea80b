//! Board coordinates.

use crate::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate on the 3x3 board.
///
/// Rows count from the top, columns from the left. A `Position` can only be
/// built through [`Position::new`] or [`Position::from_index`], so every value
/// in circulation is on the board. Deserialization goes through the same
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Number of rows and of columns.
    pub const SIZE: usize = 3;

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Creates a position, rejecting coordinates off the board.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, EngineError> {
        if row >= Self::SIZE || column >= Self::SIZE {
            return Err(EngineError::InvalidPosition { row, column });
        }
        Ok(Self::at(row as u8, column as u8))
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * Self::SIZE + self.column as usize
    }

    /// Row, counted from the top.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, counted from the left.
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = EngineError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, column)
    }
}

/// Unchecked wire form of a [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    column: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = EngineError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.column)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
