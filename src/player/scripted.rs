use std::collections::VecDeque;
use std::fmt;
use std::vec::Vec;

use crate::engine::{BoardError, BoardSnapshot, MatchObserver, MatchStatus, Marker, MoveSource};

/// The script ran out before the match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptExhausted {
    /// Marker that was waiting for a move.
    pub marker: Marker,
}

impl fmt::Display for ScriptExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move script exhausted while {} was to move", self.marker)
    }
}

impl std::error::Error for ScriptExhausted {}

/// Plays a fixed list of coordinates in order, whoever is to move.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<(usize, usize)>,
    rejected: Vec<((usize, usize), BoardError)>,
}

impl ScriptedMoves {
    pub fn new<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self {
            moves: moves.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    /// Moves the match refused, with the reason.
    pub fn rejected(&self) -> &[((usize, usize), BoardError)] {
        &self.rejected
    }

    /// Moves not yet handed out.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    type Error = ScriptExhausted;

    fn next_move(&mut self, marker: Marker) -> Result<(usize, usize), ScriptExhausted> {
        self.moves.pop_front().ok_or(ScriptExhausted { marker })
    }

    fn move_rejected(&mut self, _marker: Marker, coord: (usize, usize), reason: BoardError) {
        self.rejected.push((coord, reason));
    }
}

/// Keeps everything a match reported, for inspection afterwards.
#[derive(Debug, Clone, Default)]
pub struct MatchRecorder {
    accepted: Vec<(Marker, (usize, usize))>,
    finished: Option<MatchStatus>,
    last_board: Option<BoardSnapshot>,
}

impl MatchRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted moves in play order.
    pub fn accepted(&self) -> &[(Marker, (usize, usize))] {
        &self.accepted
    }

    /// Terminal status, once the match has ended.
    pub fn finished(&self) -> Option<MatchStatus> {
        self.finished
    }

    /// Most recent snapshot received.
    pub fn last_board(&self) -> Option<&BoardSnapshot> {
        self.last_board.as_ref()
    }
}

impl MatchObserver for MatchRecorder {
    fn move_accepted(&mut self, marker: Marker, coord: (usize, usize), board: &BoardSnapshot) {
        self.accepted.push((marker, coord));
        self.last_board = Some(*board);
    }

    fn match_finished(&mut self, status: MatchStatus, board: &BoardSnapshot) {
        self.finished = Some(status);
        self.last_board = Some(*board);
    }
}
