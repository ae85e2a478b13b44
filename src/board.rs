//! Authoritative board snapshots.

use crate::common::{Color, Piece, Square};
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// A complete 8x8 snapshot. Each square holds at most one piece.
///
/// The client never derives a board on its own; every instance it renders
/// comes from the authority (or from tests standing in for it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    /// Empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard opening: Black on the dark squares of rows 0-2, Red on rows 5-7.
    pub fn standard() -> Self {
        let mut board = Self::new();
        for row in 0..BOARD_SIZE {
            let color = match row {
                0..=2 => Color::Black,
                5..=7 => Color::Red,
                _ => continue,
            };
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 == 1 {
                    board.cells[row as usize][col as usize] = Some(Piece::man(color));
                }
            }
        }
        board
    }

    /// Build a board from explicit placements; later entries win on the same square.
    pub fn with_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Self::new();
        for (square, piece) in pieces {
            board.set(square, Some(piece));
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.map(|piece| (Square::from_indices(r, c), piece))
            })
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }
}
