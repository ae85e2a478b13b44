//! Local selection: at most one chosen piece and its displayed candidates.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::advisor::MoveAdvisor;
use crate::board::Board;
use crate::common::{Color, Square};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<Square>,
    candidates: Vec<Square>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn candidates(&self) -> &[Square] {
        &self.candidates
    }

    pub fn is_candidate(&self, square: Square) -> bool {
        self.candidates.contains(&square)
    }

    /// Drop the selection and its candidates. Returns whether anything was shown.
    pub fn clear(&mut self) -> bool {
        let had_any = self.selected.is_some() || !self.candidates.is_empty();
        self.selected = None;
        self.candidates.clear();
        had_any
    }

    /// Replace the selection with `square`.
    ///
    /// The previous selection is always cleared. A new one is only recorded
    /// when `square` holds a piece of `local`; otherwise the state stays empty
    /// and `false` is returned.
    pub fn select<A>(
        &mut self,
        square: Square,
        board: &Board,
        local: Option<Color>,
        advisor: &A,
    ) -> bool
    where
        A: MoveAdvisor + ?Sized,
    {
        self.clear();
        let owned = matches!(
            (board.get(square), local),
            (Some(piece), Some(color)) if piece.color == color
        );
        if !owned {
            return false;
        }
        self.selected = Some(square);
        self.candidates = advisor.candidates(square);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::ForwardHints;
    use crate::common::Piece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn selecting_own_piece_records_candidates() {
        let board = Board::standard();
        let mut state = SelectionState::new();
        assert!(state.select(sq(5, 2), &board, Some(Color::Red), &ForwardHints));
        assert_eq!(state.selected(), Some(sq(5, 2)));
        assert_eq!(state.candidates(), [sq(4, 1), sq(4, 3), sq(3, 0), sq(3, 4)]);
    }

    #[test]
    fn opponent_piece_clears_previous_selection() {
        let board = Board::standard();
        let mut state = SelectionState::new();
        state.select(sq(5, 2), &board, Some(Color::Red), &ForwardHints);
        assert!(!state.select(sq(2, 1), &board, Some(Color::Red), &ForwardHints));
        assert_eq!(state, SelectionState::new());
    }

    #[test]
    fn empty_square_or_unknown_player_selects_nothing() {
        let board = Board::with_pieces([(sq(4, 4), Piece::man(Color::Black))]);
        let mut state = SelectionState::new();
        assert!(!state.select(sq(3, 3), &board, Some(Color::Black), &ForwardHints));
        assert!(!state.select(sq(4, 4), &board, None, &ForwardHints));
        assert!(state.selected().is_none());
    }

    #[test]
    fn reselecting_does_not_duplicate_candidates() {
        let board = Board::standard();
        let mut state = SelectionState::new();
        state.select(sq(6, 1), &board, Some(Color::Red), &ForwardHints);
        let first = state.clone();
        state.select(sq(6, 1), &board, Some(Color::Red), &ForwardHints);
        assert_eq!(state, first);
        assert!(state.clear());
        assert!(!state.clear());
    }
}
