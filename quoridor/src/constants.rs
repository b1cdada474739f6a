pub const NUM_PAWN_ACTIONS: usize = 12;

pub const DEFAULT_BOARD_SIZE: usize = 9;
pub const MIN_BOARD_SIZE: usize = 3;
/// Columns are written as a single letter, so the board cannot be wider than the alphabet.
pub const MAX_BOARD_SIZE: usize = 25;

pub const NUM_WALLS_PER_PLAYER: usize = 10;
pub const MAX_NUMBER_OF_MOVES: usize = 200;

pub const ASCII_LETTER_A: u8 = 97;

/// Wall allowance that scales with the board, giving the standard 10 walls on a 9x9 board.
pub fn default_walls_per_player(board_size: usize) -> usize {
    (board_size + 1).pow(2) / 10
}

/// Length of the legal-action vector for a board of the given size.
pub fn action_vector_len(board_size: usize) -> usize {
    NUM_PAWN_ACTIONS + 2 * board_size * board_size
}
