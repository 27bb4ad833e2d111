//! Axes scanned for five-in-a-row and the runs found along them.

use crate::engine::common::Marker;

/// One of the four directions a line can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Every axis, in the order they are checked.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Unit step `(d_row, d_col)` in the positive direction of the axis.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// A maximal run of one marker along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub marker: Marker,
    pub axis: Axis,
    /// End reached by stepping in the negative direction.
    pub start: (usize, usize),
    /// End reached by stepping in the positive direction.
    pub end: (usize, usize),
    pub length: usize,
}

impl Line {
    /// Whether `(row, col)` lies on this line.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let (dr, dc) = self.axis.delta();
        (0..self.length).any(|i| {
            offset(self.start, dr, dc, i as isize) == Some((row, col))
        })
    }
}

/// Move `steps` units of `(dr, dc)` away from `from`, or `None` when a
/// coordinate would become negative.
pub(crate) fn offset(
    from: (usize, usize),
    dr: isize,
    dc: isize,
    steps: isize,
) -> Option<(usize, usize)> {
    let row = from.0.checked_add_signed(dr * steps)?;
    let col = from.1.checked_add_signed(dc * steps)?;
    Some((row, col))
}
