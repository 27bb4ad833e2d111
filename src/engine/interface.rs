//! Seams between the match loop and whatever supplies moves or shows results.

use crate::engine::board::BoardSnapshot;
use crate::engine::common::{BoardError, Marker};
use crate::engine::game::MatchStatus;

/// Supplies candidate moves on demand.
pub trait MoveSource {
    /// Failure that ends the match loop early (closed input, I/O, ...).
    type Error;

    /// Block until a `(row, col)` is available for `marker`.
    fn next_move(&mut self, marker: Marker) -> Result<(usize, usize), Self::Error>;

    /// The last move was refused; `next_move` is called again for the same marker.
    fn move_rejected(&mut self, _marker: Marker, _coord: (usize, usize), _reason: BoardError) {}
}

/// Receives board updates and the final result.
pub trait MatchObserver {
    /// Called after every accepted move.
    fn move_accepted(&mut self, marker: Marker, coord: (usize, usize), board: &BoardSnapshot);

    /// Called once when the match reaches a win or a draw.
    fn match_finished(&mut self, status: MatchStatus, board: &BoardSnapshot);
}
