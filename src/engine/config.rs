/// Side length of the square grid.
pub const BOARD_SIZE: usize = 15;

/// Number of aligned markers needed to win. Longer runs win too.
pub const WIN_LENGTH: usize = 5;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
