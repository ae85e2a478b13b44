use crate::board::Board;
use crate::common::{Color, Square};
use crate::render::{BoardRenderer, Scene};

/// Renderer for the command-line client: keeps a [`Scene`] and prints it
/// after every visible change, so replayed moves show up as frames.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    scene: Scene,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn redraw(&self) {
        std::println!("\n{}", self.scene);
    }
}

impl BoardRenderer for TerminalRenderer {
    fn render(&mut self, board: Option<&Board>, local: Option<Color>) {
        if board.is_some() {
            self.scene.render(board, local);
            self.redraw();
        }
    }

    fn highlight(&mut self, square: Option<Square>) {
        self.scene.highlight(square);
    }

    fn show_candidates(&mut self, origin: Square, candidates: &[Square]) {
        self.scene.show_candidates(origin, candidates);
        self.redraw();
    }

    fn clear_candidates(&mut self) {
        self.scene.clear_candidates();
    }

    fn begin_motion(&mut self, at: Square) -> bool {
        let found = self.scene.begin_motion(at);
        if found {
            self.redraw();
        }
        found
    }

    fn relocate(&mut self, from: Square, to: Square) -> bool {
        let found = self.scene.relocate(from, to);
        if found {
            self.redraw();
        }
        found
    }

    fn end_motion(&mut self, at: Square) {
        self.scene.end_motion(at);
    }

    fn set_status(&mut self, text: &str) {
        self.scene.set_status(text);
        std::println!("{}", text);
    }

    fn notice(&mut self, text: &str) {
        self.scene.notice(text);
        std::println!("\n*** {} ***", text);
    }

    fn resize(&mut self, board_width: f32) {
        self.scene.resize(board_width);
    }

    fn clear(&mut self) {
        self.scene.clear();
    }
}
