//! Common types for checkers: colors, squares, pieces, move steps and board errors.

use crate::config::BOARD_SIZE;
use core::fmt;

/// Side a piece belongs to.
///
/// `Red` is the first color: it creates the game and moves first.
/// `Black` is the second color and joins an existing game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Color of the player that creates a game.
    pub const FIRST: Color = Color::Red;
    /// Color of the player that joins a game.
    pub const SECOND: Color = Color::Black;

    /// Lowercase name used in asset names and status lines.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }

    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A single piece. It only exists while it occupies a square of a [`crate::Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self { color, king: false }
    }

    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }
}

/// A board cell. Both coordinates are always inside `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "[u8; 2]", into = "[u8; 2]"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Bounds-checked constructor.
    pub fn new(row: u8, col: u8) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds {
                row: row as i16,
                col: col as i16,
            });
        }
        Ok(Self { row, col })
    }

    /// Caller guarantees both coordinates are below `BOARD_SIZE`.
    pub(crate) const fn from_indices(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Square at the relative offset, or `None` when it falls off the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Dark squares are the only ones pieces stand on in the standard layout.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl TryFrom<[u8; 2]> for Square {
    type Error = BoardError;

    fn try_from(value: [u8; 2]) -> Result<Self, Self::Error> {
        Square::new(value[0], value[1])
    }
}

impl From<Square> for [u8; 2] {
    fn from(square: Square) -> Self {
        [square.row, square.col]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One atomic relocation, used for submitted intents and for replayed remote moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveStep {
    pub start: Square,
    pub end: Square,
}

impl MoveStep {
    pub fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }
}

/// Errors returned by board model operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside the 8x8 grid.
    OutOfBounds { row: i16, col: i16 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Square ({}, {}) is outside the board", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
