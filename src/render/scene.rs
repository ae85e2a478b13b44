use std::fmt;

use crate::board::Board;
use crate::common::{Color, Square};
use crate::config::BOARD_SIZE;
use crate::render::layout::{square_center, square_origin, Layout};
use crate::render::BoardRenderer;

/// One drawn piece.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceVisual {
    pub square: Square,
    pub color: Color,
    pub king: bool,
    /// Offset from the board's top edge, in percent.
    pub top: f32,
    /// Offset from the board's left edge, in percent.
    pub left: f32,
    pub asset: String,
    /// Only the local player's pieces respond to clicks.
    pub interactive: bool,
    pub selected: bool,
    pub moving: bool,
}

/// A clickable candidate marker, centered in its target square.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerVisual {
    pub origin: Square,
    pub target: Square,
    pub top: f32,
    pub left: f32,
}

/// Asset naming convention: `<color>-<king|piece>.png`.
pub fn asset_name(color: Color, king: bool) -> String {
    format!("{}-{}.png", color.name(), if king { "king" } else { "piece" })
}

/// Retained visual model of the board area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pieces: Vec<PieceVisual>,
    markers: Vec<MarkerVisual>,
    status: String,
    notices: Vec<String>,
    layout: Layout,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pieces(&self) -> &[PieceVisual] {
        &self.pieces
    }

    pub fn markers(&self) -> &[MarkerVisual] {
        &self.markers
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn piece_at(&self, square: Square) -> Option<&PieceVisual> {
        self.pieces.iter().find(|p| p.square == square)
    }

    pub fn marker_at(&self, square: Square) -> Option<&MarkerVisual> {
        self.markers.iter().find(|m| m.target == square)
    }

    fn piece_at_mut(&mut self, square: Square) -> Option<&mut PieceVisual> {
        self.pieces.iter_mut().find(|p| p.square == square)
    }
}

impl BoardRenderer for Scene {
    fn render(&mut self, board: Option<&Board>, local: Option<Color>) {
        let Some(board) = board else {
            return;
        };
        self.pieces.clear();
        self.markers.clear();
        for (square, piece) in board.pieces() {
            let (top, left) = square_origin(square);
            self.pieces.push(PieceVisual {
                square,
                color: piece.color,
                king: piece.king,
                top,
                left,
                asset: asset_name(piece.color, piece.king),
                interactive: Some(piece.color) == local,
                selected: false,
                moving: false,
            });
        }
    }

    fn highlight(&mut self, square: Option<Square>) {
        for piece in &mut self.pieces {
            piece.selected = Some(piece.square) == square;
        }
    }

    fn show_candidates(&mut self, origin: Square, candidates: &[Square]) {
        self.markers = candidates
            .iter()
            .map(|&target| {
                let (top, left) = square_center(target);
                MarkerVisual {
                    origin,
                    target,
                    top,
                    left,
                }
            })
            .collect();
    }

    fn clear_candidates(&mut self) {
        self.markers.clear();
    }

    fn begin_motion(&mut self, at: Square) -> bool {
        match self.piece_at_mut(at) {
            Some(piece) => {
                piece.moving = true;
                true
            }
            None => false,
        }
    }

    fn relocate(&mut self, from: Square, to: Square) -> bool {
        match self.piece_at_mut(from) {
            Some(piece) => {
                let (top, left) = square_origin(to);
                piece.square = to;
                piece.top = top;
                piece.left = left;
                true
            }
            None => false,
        }
    }

    fn end_motion(&mut self, at: Square) {
        if let Some(piece) = self.piece_at_mut(at) {
            piece.moving = false;
        }
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn notice(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }

    fn resize(&mut self, board_width: f32) {
        self.layout = Layout::for_board_width(board_width);
    }

    fn clear(&mut self) {
        self.pieces.clear();
        self.markers.clear();
        self.status.clear();
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {} ", c)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{:2} ", r)?;
            for c in 0..BOARD_SIZE {
                let Ok(square) = Square::new(r, c) else {
                    continue;
                };
                let cell = if let Some(piece) = self.piece_at(square) {
                    let letter = match (piece.color, piece.king) {
                        (Color::Red, false) => 'r',
                        (Color::Red, true) => 'R',
                        (Color::Black, false) => 'b',
                        (Color::Black, true) => 'B',
                    };
                    if piece.moving {
                        format!("({})", letter)
                    } else if piece.selected {
                        format!("[{}]", letter)
                    } else {
                        format!(" {} ", letter)
                    }
                } else if self.marker_at(square).is_some() {
                    " * ".to_string()
                } else if square.is_dark() {
                    " . ".to_string()
                } else {
                    "   ".to_string()
                };
                f.write_str(&cell)?;
            }
            writeln!(f)?;
        }
        if !self.status.is_empty() {
            writeln!(f, "{}", self.status)?;
        }
        Ok(())
    }
}
