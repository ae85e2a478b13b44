#![allow(dead_code)]

use checkers_sync::{Board, BoardRenderer, Color, GameId, MoveStep, Scene, Square, SyncChannel};

/// Calls observed by [`RecordingChannel`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateGame,
    JoinGame(GameId),
    Connect(GameId),
    MakeMove(GameId, MoveStep),
    Disconnect,
}

/// Channel double: records every call and answers from its configuration.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    pub calls: Vec<Call>,
    /// `None` makes `create_game` fail.
    pub created_id: Option<String>,
    /// `None` makes `join_game` fail with a transport error.
    pub join_answer: Option<bool>,
    pub fail_moves: bool,
}

impl RecordingChannel {
    pub fn creating(id: &str) -> Self {
        Self {
            created_id: Some(id.to_string()),
            join_answer: Some(true),
            ..Self::default()
        }
    }

    pub fn moves(&self) -> Vec<MoveStep> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::MakeMove(_, step) => Some(*step),
                _ => None,
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl SyncChannel for RecordingChannel {
    async fn create_game(&mut self) -> anyhow::Result<GameId> {
        self.calls.push(Call::CreateGame);
        self.created_id
            .clone()
            .map(GameId::new)
            .ok_or_else(|| anyhow::anyhow!("Connection refused"))
    }

    async fn join_game(&mut self, game_id: &GameId) -> anyhow::Result<bool> {
        self.calls.push(Call::JoinGame(game_id.clone()));
        self.join_answer
            .ok_or_else(|| anyhow::anyhow!("Connection refused"))
    }

    async fn connect(&mut self, game_id: &GameId) -> anyhow::Result<()> {
        self.calls.push(Call::Connect(game_id.clone()));
        Ok(())
    }

    async fn make_move(&mut self, game_id: &GameId, step: MoveStep) -> anyhow::Result<()> {
        self.calls.push(Call::MakeMove(game_id.clone(), step));
        if self.fail_moves {
            return Err(anyhow::anyhow!("Connection closed by peer"));
        }
        Ok(())
    }

    async fn disconnect(&mut self) {
        self.calls.push(Call::Disconnect);
    }
}

/// Renderer operations observed by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Render(Board),
    Highlight(Option<Square>),
    ShowCandidates(Square, Vec<Square>),
    ClearCandidates,
    BeginMotion(Square),
    Relocate(Square, Square),
    EndMotion(Square),
    Status(String),
    Notice(String),
    Resize(f32),
    Clear,
}

/// Renderer double: keeps a real [`Scene`] and logs every call that changed it.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub ops: Vec<Op>,
    pub scene: Scene,
}

impl RecordingRenderer {
    pub fn renders(&self) -> Vec<&Board> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Render(board) => Some(board),
                _ => None,
            })
            .collect()
    }

    pub fn relocations(&self) -> Vec<(Square, Square)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Relocate(from, to) => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl BoardRenderer for RecordingRenderer {
    fn render(&mut self, board: Option<&Board>, local: Option<Color>) {
        if let Some(board) = board {
            self.ops.push(Op::Render(*board));
        }
        self.scene.render(board, local);
    }

    fn highlight(&mut self, square: Option<Square>) {
        self.ops.push(Op::Highlight(square));
        self.scene.highlight(square);
    }

    fn show_candidates(&mut self, origin: Square, candidates: &[Square]) {
        self.ops.push(Op::ShowCandidates(origin, candidates.to_vec()));
        self.scene.show_candidates(origin, candidates);
    }

    fn clear_candidates(&mut self) {
        self.ops.push(Op::ClearCandidates);
        self.scene.clear_candidates();
    }

    fn begin_motion(&mut self, at: Square) -> bool {
        let found = self.scene.begin_motion(at);
        if found {
            self.ops.push(Op::BeginMotion(at));
        }
        found
    }

    fn relocate(&mut self, from: Square, to: Square) -> bool {
        let found = self.scene.relocate(from, to);
        if found {
            self.ops.push(Op::Relocate(from, to));
        }
        found
    }

    fn end_motion(&mut self, at: Square) {
        self.ops.push(Op::EndMotion(at));
        self.scene.end_motion(at);
    }

    fn set_status(&mut self, text: &str) {
        self.ops.push(Op::Status(text.to_string()));
        self.scene.set_status(text);
    }

    fn notice(&mut self, text: &str) {
        self.ops.push(Op::Notice(text.to_string()));
        self.scene.notice(text);
    }

    fn resize(&mut self, board_width: f32) {
        self.ops.push(Op::Resize(board_width));
        self.scene.resize(board_width);
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
        self.scene.clear();
    }
}

pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}
