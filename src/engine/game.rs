use crate::engine::{
    board::Board,
    common::{BoardError, Marker},
    interface::{MatchObserver, MoveSource},
    line::Line,
};
use core::fmt;
use log::{debug, info};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MatchStatus {
    InProgress,
    Won(Marker),
    Draw,
}

impl MatchStatus {
    /// `true` for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    /// Winning marker, if any.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            MatchStatus::Won(marker) => Some(*marker),
            _ => None,
        }
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The board refused the placement; the same player moves again.
    Rejected(BoardError),
    /// The match already ended.
    MatchOver(MatchStatus),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Rejected(err)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Rejected(e) => write!(f, "move rejected: {}", e),
            MoveError::MatchOver(status) => write!(f, "match is over ({:?})", status),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Turn order and terminal detection around a single [`Board`].
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    current: Marker,
    moves: usize,
    last_move: Option<(usize, usize)>,
    status: MatchStatus,
}

impl Match {
    /// Fresh match on an empty board, `X` to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Marker::X,
            moves: 0,
            last_move: None,
            status: MatchStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker expected to move next. After a win this is the winner.
    pub fn current(&self) -> Marker {
        self.current
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// The line through the final move of a won match.
    pub fn winning_line(&self) -> Option<Line> {
        if !matches!(self.status, MatchStatus::Won(_)) {
            return None;
        }
        let (row, col) = self.last_move?;
        self.board.winning_line(row, col)
    }

    /// Apply one move for the current marker.
    ///
    /// The win check runs before the draw check, and the turn passes only
    /// when neither ends the match.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MatchStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::MatchOver(self.status));
        }
        let marker = self.current;
        self.board.try_place(row, col, marker)?;
        self.moves += 1;
        self.last_move = Some((row, col));
        debug!("move {}: {} at ({}, {})", self.moves, marker, row, col);

        if self.board.check_win(row, col) {
            self.status = MatchStatus::Won(marker);
            info!("{} wins after {} moves", marker, self.moves);
        } else if self.board.is_full() {
            self.status = MatchStatus::Draw;
            info!("board full after {} moves, draw", self.moves);
        } else {
            self.current = marker.other();
        }
        Ok(self.status)
    }

    /// Drive the match to a terminal state.
    ///
    /// Rejected moves are reported back to `source` and retried for the same
    /// marker. An error from `source` stops the loop and is returned as is.
    pub fn run<S, O>(&mut self, source: &mut S, observer: &mut O) -> Result<MatchStatus, S::Error>
    where
        S: MoveSource,
        O: MatchObserver,
    {
        while !self.status.is_terminal() {
            let marker = self.current;
            let (row, col) = source.next_move(marker)?;
            match self.play(row, col) {
                Ok(_) => observer.move_accepted(marker, (row, col), &self.board.snapshot()),
                Err(MoveError::Rejected(reason)) => {
                    source.move_rejected(marker, (row, col), reason)
                }
                Err(MoveError::MatchOver(_)) => break,
            }
        }
        observer.match_finished(self.status, &self.board.snapshot());
        Ok(self.status)
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
