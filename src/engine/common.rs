//! Common types for Gomoku: markers, cell states and board errors.

use core::fmt;

/// Identifies which player owns a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Marker {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Marker {
    /// The opposing marker.
    pub const fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Character used when rendering this marker.
    pub const fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Marker occupying the cell, if any.
    pub const fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Marker::X),
            Cell::O => Some(Marker::O),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used when rendering the cell.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::X => Cell::X,
            Marker::O => Cell::O,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Reasons a placement is refused by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// The cell already holds a marker.
    Occupied { row: usize, col: usize, by: Marker },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "position ({}, {}) is outside the board", row, col)
            }
            BoardError::Occupied { row, col, by } => {
                write!(f, "position ({}, {}) is already taken by {}", row, col, by)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
