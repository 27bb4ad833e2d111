//! Players and the move sources / observers that stand in for them
//!
//! - CliInput / CliView: interactive console play
//! - ScriptedMoves / MatchRecorder: fixed move lists for simulations and tests

use std::fmt;
use std::string::String;

use crate::engine::Marker;

/// A named participant bound to one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

/// Both seats of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    x: Player,
    o: Player,
}

impl Roster {
    pub fn new(x_name: impl Into<String>, o_name: impl Into<String>) -> Self {
        Self {
            x: Player::new(x_name, Marker::X),
            o: Player::new(o_name, Marker::O),
        }
    }

    /// Player holding `marker`.
    pub fn player(&self, marker: Marker) -> &Player {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("Player X", "Player O")
    }
}

pub mod cli;
pub use cli::{parse_move, write_board, CliInput, CliView, InputError};

pub mod scripted;
pub use scripted::{MatchRecorder, ScriptExhausted, ScriptedMoves};
