/// Rows and columns on a checkers board.
pub const BOARD_SIZE: u8 = 8;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Width of one square as a percentage of the board area.
pub const SQUARE_PERCENT: f32 = 12.5;

/// Piece diameter as a fraction of a square.
pub const PIECE_SCALE: f32 = 0.7;

/// Hold between replay phases (highlight, relocation), in milliseconds.
pub const STEP_DELAY_MS: u64 = 500;

/// Upper bound for a one-shot request round trip, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Largest frame accepted on the wire (1 MiB).
pub const MAX_FRAME_SIZE: u32 = 1 << 20;

/// Default authority address used by the binary.
pub const DEFAULT_SERVER: &str = "127.0.0.1:8080";
