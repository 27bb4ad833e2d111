use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::{String, ToString};

use log::{debug, warn};

use crate::engine::{
    config::BOARD_SIZE, BoardError, BoardSnapshot, MatchObserver, MatchStatus, Marker, MoveSource,
};

use super::Roster;

/// Failure reading moves from the console.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    /// Input ended before the match finished.
    Closed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "I/O error while reading moves: {}", e),
            InputError::Closed => write!(f, "input closed before the match finished"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Closed => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Parse `"row col"` or `"row,col"` into zero-based coordinates.
///
/// Range is not checked here; the board rejects cells outside the grid.
pub fn parse_move(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let row_str = parts.next().ok_or("Missing row")?;
    let col_str = parts
        .next()
        .ok_or("Missing column - enter row and column (e.g., 7 7)")?;
    if parts.next().is_some() {
        return Err("Too many values - enter exactly a row and a column".to_string());
    }
    let row = parse_index(row_str, "row")?;
    let col = parse_index(col_str, "column")?;
    Ok((row, col))
}

fn parse_index(s: &str, what: &str) -> Result<usize, String> {
    s.parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number 0-{}", what, s, BOARD_SIZE - 1))
}

/// Reads moves line by line from `input`, prompting on `output`.
pub struct CliInput<R, W> {
    roster: Roster,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliInput<R, W> {
    pub fn new(roster: Roster, input: R, output: W) -> Self {
        Self {
            roster,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for CliInput<R, W> {
    type Error = InputError;

    fn next_move(&mut self, marker: Marker) -> Result<(usize, usize), InputError> {
        let player = self.roster.player(marker);
        loop {
            write!(self.output, "{}, enter your move (row and column): ", player)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::Closed);
            }
            match parse_move(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    writeln!(self.output, "✗ {}", e)?;
                }
            }
        }
    }

    fn move_rejected(&mut self, marker: Marker, coord: (usize, usize), reason: BoardError) {
        debug!("rejected {} at ({}, {}): {}", marker, coord.0, coord.1, reason);
        if let Err(e) = writeln!(self.output, "Invalid move: {}. Try again.", reason) {
            warn!("failed to write to console: {}", e);
        }
    }
}

/// Render `board` with row and column indices.
pub fn write_board<W: Write>(out: &mut W, board: &BoardSnapshot) -> io::Result<()> {
    write!(out, "   ")?;
    for c in 0..BOARD_SIZE {
        write!(out, "{:>3}", c)?;
    }
    writeln!(out)?;
    for (r, row) in board.rows().enumerate() {
        write!(out, "{:>3}", r)?;
        for cell in row.iter() {
            write!(out, "{:>3}", cell.symbol())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Prints the board after each move and announces the result.
pub struct CliView<W> {
    roster: Roster,
    output: W,
}

impl<W: Write> CliView<W> {
    pub fn new(roster: Roster, output: W) -> Self {
        Self { roster, output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn show_move(&mut self, marker: Marker, coord: (usize, usize), board: &BoardSnapshot) -> io::Result<()> {
        writeln!(
            self.output,
            "{} placed at ({}, {})",
            self.roster.player(marker),
            coord.0,
            coord.1
        )?;
        writeln!(self.output, "Current board:")?;
        write_board(&mut self.output, board)
    }

    fn show_result(&mut self, status: MatchStatus, board: &BoardSnapshot) -> io::Result<()> {
        writeln!(self.output, "\nFinal board:")?;
        write_board(&mut self.output, board)?;
        match status {
            MatchStatus::Won(marker) => {
                writeln!(self.output, "{} wins!", self.roster.player(marker))
            }
            MatchStatus::Draw => writeln!(self.output, "The game is a draw!"),
            MatchStatus::InProgress => Ok(()),
        }
    }
}

impl<W: Write> MatchObserver for CliView<W> {
    fn move_accepted(&mut self, marker: Marker, coord: (usize, usize), board: &BoardSnapshot) {
        if let Err(e) = self.show_move(marker, coord, board) {
            warn!("failed to render board: {}", e);
        }
    }

    fn match_finished(&mut self, status: MatchStatus, board: &BoardSnapshot) {
        if let Err(e) = self.show_result(status, board) {
            warn!("failed to render result: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Match;
    use std::io::Cursor;

    #[test]
    fn parse_accepts_spaces_and_commas() {
        assert_eq!(parse_move("7 4"), Ok((7, 4)));
        assert_eq!(parse_move(" 0,14 \n"), Ok((0, 14)));
        assert_eq!(parse_move("3 , 5"), Ok((3, 5)));
    }

    #[test]
    fn parse_leaves_range_to_the_board() {
        assert_eq!(parse_move("15 0"), Ok((15, 0)));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse_move("").is_err());
        assert!(parse_move("7").is_err());
        assert!(parse_move("a b").is_err());
        assert!(parse_move("-1 3").is_err());
        assert!(parse_move("1 2 3").is_err());
    }

    #[test]
    fn cli_input_skips_bad_lines_and_reports_closed() {
        let input = Cursor::new("hello\n7\n3 4\n");
        let mut out = Vec::new();
        let mut source = CliInput::new(Roster::default(), input, &mut out);
        assert_eq!(source.next_move(Marker::X).unwrap(), (3, 4));
        assert!(matches!(source.next_move(Marker::O), Err(InputError::Closed)));
        drop(source);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Player X (X), enter your move"));
        assert!(text.contains("Player O (O), enter your move"));
        assert_eq!(text.matches("✗").count(), 2);
    }

    #[test]
    fn console_game_announces_winner() {
        let moves = "7 0\n0 0\n7 1\n7 1\n0 1\n7 2\n0 2\n7 3\n0 3\n7 4\n";
        let roster = Roster::new("Alice", "Bob");
        let mut source = CliInput::new(roster.clone(), Cursor::new(moves), Vec::new());
        let mut view = CliView::new(roster, Vec::new());
        let mut game = Match::new();
        let status = game.run(&mut source, &mut view).unwrap();
        assert_eq!(status, MatchStatus::Won(Marker::X));

        let prompts = String::from_utf8(source.output).unwrap();
        assert!(prompts.contains("Invalid move: position (7, 1) is already taken by X"));

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.contains("Current board:"));
        assert!(text.ends_with("Alice (X) wins!\n"));
    }
}
