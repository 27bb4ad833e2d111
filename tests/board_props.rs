use gomoku::{Board, Marker, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Board filled with `stones` random placements, alternating markers.
fn random_board(seed: u64, stones: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut marker = Marker::X;
    for _ in 0..stones {
        let r = rng.random_range(0..BOARD_SIZE);
        let c = rng.random_range(0..BOARD_SIZE);
        if board.place(r, c, marker) {
            marker = marker.other();
        }
    }
    board
}

/// Rotate a board 90 degrees clockwise: (r, c) -> (c, N - 1 - r).
fn rotate(board: &Board) -> Board {
    let mut rotated = Board::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if let Some(marker) = board.cell(r, c).and_then(|cell| cell.marker()) {
                assert!(rotated.place(c, BOARD_SIZE - 1 - r, marker));
            }
        }
    }
    rotated
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn place_empty_cell_then_retry_rejected(
        seed in any::<u64>(),
        stones in 0usize..120,
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = random_board(seed, stones);
        prop_assume!(board.cell(row, col).unwrap().is_empty());
        let count = board.stone_count();
        prop_assert!(board.place(row, col, Marker::O));
        prop_assert_eq!(board.stone_count(), count + 1);
        let after = board.clone();
        prop_assert!(!board.place(row, col, Marker::X));
        prop_assert!(!board.place(row, col, Marker::O));
        prop_assert_eq!(board, after);
    }

    #[test]
    fn out_of_range_never_mutates(
        seed in any::<u64>(),
        stones in 0usize..120,
        row in BOARD_SIZE..usize::MAX,
        col in any::<usize>(),
        swap in any::<bool>(),
    ) {
        let mut board = random_board(seed, stones);
        let before = board.clone();
        let (r, c) = if swap { (col, row) } else { (row, col) };
        prop_assert!(!board.place(r, c, Marker::X));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn check_win_invariant_under_rotation(seed in any::<u64>(), stones in 20usize..160) {
        let board = random_board(seed, stones);
        let rotated = rotate(&board);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                prop_assert_eq!(
                    board.check_win(r, c),
                    rotated.check_win(c, BOARD_SIZE - 1 - r),
                    "cell ({}, {})", r, c
                );
            }
        }
    }

    #[test]
    fn local_scan_agrees_with_full_scan(seed in any::<u64>(), stones in 0usize..200) {
        let board = random_board(seed, stones);
        let any_local = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .any(|(r, c)| board.check_win(r, c));
        prop_assert_eq!(any_local, board.winner_by_scan().is_some());
    }
}
