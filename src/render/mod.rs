//! Visual side of the client.
//!
//! [`BoardRenderer`] is the seam between the controller and whatever draws
//! the board. [`Scene`] is the retained visual model every concrete
//! renderer in this crate is built on.

use crate::board::Board;
use crate::common::{Color, Square};

pub mod layout;
pub mod scene;
pub mod terminal;

pub use layout::Layout;
pub use scene::{MarkerVisual, PieceVisual, Scene};
pub use terminal::TerminalRenderer;

pub trait BoardRenderer {
    /// Drop every piece visual and candidate marker, then rebuild pieces from `board`.
    ///
    /// `None` means no snapshot has arrived yet and leaves the view untouched.
    /// Pieces of `local` are wired for clicks; all others are inert.
    fn render(&mut self, board: Option<&Board>, local: Option<Color>);

    /// Highlight the selected piece, or remove the highlight.
    fn highlight(&mut self, square: Option<Square>);

    /// Replace candidate markers with one per entry of `candidates`.
    fn show_candidates(&mut self, origin: Square, candidates: &[Square]);

    fn clear_candidates(&mut self);

    /// Mark the visual on `at` as in motion. Returns `false` when no visual stands there.
    fn begin_motion(&mut self, at: Square) -> bool;

    /// Move the visual on `from` to `to`. Returns `false` when no visual stands on `from`.
    fn relocate(&mut self, from: Square, to: Square) -> bool;

    fn end_motion(&mut self, at: Square);

    /// Non-blocking status line.
    fn set_status(&mut self, text: &str);

    /// Blocking notice the user has to acknowledge.
    fn notice(&mut self, text: &str);

    /// Board area width changed; recompute piece sizing.
    fn resize(&mut self, board_width: f32);

    /// Remove all visuals, markers and status text.
    fn clear(&mut self);
}
