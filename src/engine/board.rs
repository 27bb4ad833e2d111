//! Grid occupancy, placement rule and five-in-a-row detection.

use crate::engine::common::{BoardError, Cell, Marker};
use crate::engine::config::{BOARD_CELLS, BOARD_SIZE, WIN_LENGTH};
use crate::engine::line::{offset, Axis, Line};
use core::fmt;

/// Owned copy of every cell, handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardSnapshot {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardSnapshot {
    /// Cell at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The playing grid. Cells only ever go from empty to occupied.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
    filled: usize,
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
            filled: 0,
        }
    }

    fn index(row: usize, col: usize) -> Option<usize> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    /// Cell at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Number of occupied cells.
    pub fn stone_count(&self) -> usize {
        self.filled
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        BOARD_CELLS - self.filled
    }

    /// Returns `true` once no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.filled == BOARD_CELLS
    }

    /// Put `marker` at (row, col) if the cell exists and is empty.
    pub fn try_place(&mut self, row: usize, col: usize, marker: Marker) -> Result<(), BoardError> {
        let idx = Self::index(row, col).ok_or(BoardError::OutOfBounds { row, col })?;
        if let Some(by) = self.cells[idx].marker() {
            return Err(BoardError::Occupied { row, col, by });
        }
        self.cells[idx] = Cell::from(marker);
        self.filled += 1;
        Ok(())
    }

    /// Boolean form of [`Board::try_place`]: `false` means nothing changed.
    pub fn place(&mut self, row: usize, col: usize, marker: Marker) -> bool {
        self.try_place(row, col, marker).is_ok()
    }

    /// Returns `true` if a run of at least [`WIN_LENGTH`] passes through
    /// (row, col). Only the four lines through that cell are inspected.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.winning_line(row, col).is_some()
    }

    /// First axis whose run through (row, col) is long enough to win.
    pub fn winning_line(&self, row: usize, col: usize) -> Option<Line> {
        Axis::ALL
            .iter()
            .filter_map(|&axis| self.line_through(row, col, axis))
            .find(|line| line.length >= WIN_LENGTH)
    }

    /// Length of the same-marker run through (row, col) along `axis`.
    /// Zero when the cell is empty or off the board.
    pub fn run_length(&self, row: usize, col: usize, axis: Axis) -> usize {
        self.line_through(row, col, axis).map_or(0, |line| line.length)
    }

    /// Maximal run through an occupied cell along one axis.
    pub fn line_through(&self, row: usize, col: usize, axis: Axis) -> Option<Line> {
        let marker = self.cell(row, col)?.marker()?;
        let (dr, dc) = axis.delta();
        let forward = self.count_from(row, col, marker, dr, dc);
        let backward = self.count_from(row, col, marker, -dr, -dc);
        let start = offset((row, col), dr, dc, -(backward as isize))?;
        let end = offset((row, col), dr, dc, forward as isize)?;
        Some(Line {
            marker,
            axis,
            start,
            end,
            length: forward + backward + 1,
        })
    }

    /// Consecutive `marker` cells after (row, col) in direction (dr, dc),
    /// not counting the origin.
    fn count_from(&self, row: usize, col: usize, marker: Marker, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let mut pos = (row, col);
        while let Some((r, c)) = offset(pos, dr, dc, 1) {
            if self.cell(r, c).and_then(Cell::marker) != Some(marker) {
                break;
            }
            count += 1;
            pos = (r, c);
        }
        count
    }

    /// Scan the whole grid for any winning run. Slower than
    /// [`Board::check_win`]; reports the first run found in row-major order.
    pub fn winner_by_scan(&self) -> Option<Marker> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let Some(marker) = self.cells[row * BOARD_SIZE + col].marker() else {
                    continue;
                };
                for axis in Axis::ALL {
                    let (dr, dc) = axis.delta();
                    // only start counting at the first cell of a run
                    let prev = offset((row, col), dr, dc, -1)
                        .and_then(|(r, c)| self.cell(r, c))
                        .and_then(Cell::marker);
                    if prev == Some(marker) {
                        continue;
                    }
                    if 1 + self.count_from(row, col, marker, dr, dc) >= WIN_LENGTH {
                        return Some(marker);
                    }
                }
            }
        }
        None
    }

    /// Copy of the grid for display.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE]);
        }
        BoardSnapshot { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ filled: {} }}", self.filled)?;
        write!(f, "{}", self.snapshot())
    }
}
