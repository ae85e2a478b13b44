use crate::common::Square;
use crate::config::{BOARD_SIZE, PIECE_SCALE, SQUARE_PERCENT};

/// Pixel sizes derived from the current board width. Recomputed on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub square_size: f32,
    pub piece_size: f32,
    pub piece_margin: f32,
}

impl Layout {
    pub fn for_board_width(width: f32) -> Self {
        let square_size = width.max(0.0) / BOARD_SIZE as f32;
        let piece_size = square_size * PIECE_SCALE;
        Self {
            square_size,
            piece_size,
            piece_margin: (square_size - piece_size) / 2.0,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_board_width(0.0)
    }
}

/// Top-left corner of `square`, as (top, left) percentages of the board.
pub fn square_origin(square: Square) -> (f32, f32) {
    (
        square.row() as f32 * SQUARE_PERCENT,
        square.col() as f32 * SQUARE_PERCENT,
    )
}

/// Center of `square`, as (top, left) percentages of the board.
pub fn square_center(square: Square) -> (f32, f32) {
    let (top, left) = square_origin(square);
    (top + SQUARE_PERCENT / 2.0, left + SQUARE_PERCENT / 2.0)
}
