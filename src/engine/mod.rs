//! Core Gomoku engine (no_std compatible)
//!
//! Board occupancy, the five-in-a-row scan and the match state machine.
//! Nothing here allocates or touches I/O; moves come in and results go out
//! through the traits in [`interface`].

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod interface;
pub mod line;

pub use board::{Board, BoardSnapshot};
pub use common::{BoardError, Cell, Marker};
pub use config::*;
pub use game::{Match, MatchStatus, MoveError};
pub use interface::{MatchObserver, MoveSource};
pub use line::{Axis, Line};
