//! Client-side move hints.
//!
//! Hints are deliberately over-permissive: they ignore occupancy, captures
//! and king moves. The authority decides legality when the intent arrives.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::Square;

/// Relative offsets offered from a selected piece: forward single steps, then double jumps.
pub const FORWARD_OFFSETS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (-2, -2), (-2, 2)];

/// Trait that lets the controller obtain candidate destinations without
/// depending on a particular hinting strategy.
pub trait MoveAdvisor {
    /// Candidate destinations for a piece standing on `origin`.
    fn candidates(&self, origin: Square) -> Vec<Square>;
}

/// [`MoveAdvisor`] offering the geometric forward steps and jumps that stay on the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardHints;

impl MoveAdvisor for ForwardHints {
    fn candidates(&self, origin: Square) -> Vec<Square> {
        FORWARD_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| origin.offset(dr, dc))
            .collect()
    }
}

/// [`MoveAdvisor`] that never suggests anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHints;

impl MoveAdvisor for NoHints {
    fn candidates(&self, _origin: Square) -> Vec<Square> {
        Vec::new()
    }
}
