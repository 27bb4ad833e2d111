#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use gomoku::{write_board, Board, Marker, Player, Roster};

    #[test]
    fn test_player_display() {
        let player = Player::new("Alice", Marker::X);
        assert_eq!(player.to_string(), "Alice (X)");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.marker(), Marker::X);
    }

    #[test]
    fn test_roster_seats() {
        let roster = Roster::new("Alice", "Bob");
        assert_eq!(roster.player(Marker::X).name(), "Alice");
        assert_eq!(roster.player(Marker::O).to_string(), "Bob (O)");
        assert_eq!(Roster::default().player(Marker::O).name(), "Player O");
    }

    #[test]
    fn test_write_board_has_indices() {
        let mut board = Board::new();
        board.place(0, 14, Marker::O);
        board.place(14, 0, Marker::X);
        let mut out = Vec::new();
        write_board(&mut out, &board.snapshot()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines[0].trim_start().starts_with("0  1  2"));
        assert!(lines[0].ends_with("14"));
        assert!(lines[1].starts_with("  0  ."));
        assert!(lines[1].ends_with("O"));
        assert!(lines[15].starts_with(" 14  X"));
    }
}
