//! Interaction and synchronization controller.
//!
//! Every user gesture and every authoritative push enters through
//! [`Controller::handle`]. The controller owns the game session and the
//! selection. The renderer, channel and advisor are injected.

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};

use crate::advisor::MoveAdvisor;
use crate::animator::ReplayAnimator;
use crate::board::Board;
use crate::channel::{Push, ServerEvent, SyncChannel};
use crate::common::{Color, MoveStep, Square};
use crate::protocol::GameId;
use crate::render::BoardRenderer;
use crate::selection::SelectionState;

/// Everything the controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Create a game and take the first color.
    NewGame,
    /// Join an existing game as the second color.
    JoinGame(GameId),
    /// Click on a square; routed to a marker or a piece.
    Click(Square),
    PieceClicked(Square),
    /// Click on the candidate marker standing on the given square.
    MarkerClicked(Square),
    Resize { width: f32 },
    Reset,
    Server(Push),
}

impl From<Push> for Event {
    fn from(push: Push) -> Self {
        Event::Server(push)
    }
}

/// Local view of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub game_id: GameId,
    pub local_color: Color,
    /// Unknown until the first push arrives.
    pub current_turn: Option<Color>,
    pub winner: Option<Color>,
}

impl GameSession {
    fn new(game_id: GameId, local_color: Color) -> Self {
        Self {
            game_id,
            local_color,
            current_turn: None,
            winner: None,
        }
    }

    /// Whether the local player is believed to hold the turn.
    pub fn is_local_turn(&self) -> bool {
        self.winner.is_none() && self.current_turn == Some(self.local_color)
    }
}

pub struct Controller<R, C, A> {
    renderer: R,
    channel: C,
    advisor: A,
    session: Option<GameSession>,
    selection: SelectionState,
    board: Option<Board>,
    animator: ReplayAnimator,
}

async fn until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

impl<R, C, A> Controller<R, C, A>
where
    R: BoardRenderer,
    C: SyncChannel,
    A: MoveAdvisor,
{
    pub fn new(renderer: R, channel: C, advisor: A) -> Self {
        Self {
            renderer,
            channel,
            advisor,
            session: None,
            selection: SelectionState::new(),
            board: None,
            animator: ReplayAnimator::new(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Last authoritative snapshot.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn animator(&self) -> &ReplayAnimator {
        &self.animator
    }

    fn local_color(&self) -> Option<Color> {
        self.session.as_ref().map(|s| s.local_color)
    }

    pub async fn handle(&mut self, event: Event) {
        self.handle_at(event, Instant::now()).await;
    }

    /// Dispatch `event` as if it arrived at `now`.
    pub async fn handle_at(&mut self, event: Event, now: Instant) {
        match event {
            Event::NewGame => self.new_game().await,
            Event::JoinGame(game_id) => self.join(game_id).await,
            Event::Click(square) => self.click(square).await,
            Event::PieceClicked(square) => {
                self.select(square);
            }
            Event::MarkerClicked(target) => self.marker_clicked(target).await,
            Event::Resize { width } => self.renderer.resize(width),
            Event::Reset => self.reset().await,
            Event::Server(push) => self.apply_push(push, now),
        }
    }

    /// Advance any running replay to `now`.
    ///
    /// Landing on the final snapshot is an authoritative render, so any
    /// selection made during the replay is dropped with it.
    pub fn tick(&mut self, now: Instant) {
        if self.animator.advance(now, &mut self.renderer) {
            self.clear_selection();
        }
    }

    /// When [`Controller::tick`] next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.animator.deadline()
    }

    /// Single-task event loop: user input, authoritative pushes and replay timing.
    ///
    /// Returns once `inputs` is closed.
    pub async fn run(
        &mut self,
        mut inputs: UnboundedReceiver<Event>,
        mut pushes: UnboundedReceiver<Push>,
    ) {
        loop {
            let deadline = self.next_deadline();
            tokio::select! {
                biased;
                _ = until(deadline) => self.tick(Instant::now()),
                Some(push) = pushes.recv() => self.handle(Event::Server(push)).await,
                input = inputs.recv() => match input {
                    Some(event) => self.handle(event).await,
                    None => break,
                },
            }
        }
        log::debug!("input closed, controller loop finished");
    }

    pub async fn new_game(&mut self) {
        self.reset().await;
        let game_id = match self.channel.create_game().await {
            Ok(id) => id,
            Err(e) => {
                log::warn!("create game failed: {:#}", e);
                self.renderer.notice("Could not create game");
                return;
            }
        };
        log::info!("created game {}", game_id);
        self.start_session(game_id.clone(), Color::FIRST).await;
        if self.session.is_some() {
            self.renderer
                .set_status(&format!("Waiting for opponent... (game {})", game_id));
        }
    }

    pub async fn join(&mut self, game_id: GameId) {
        match self.channel.join_game(&game_id).await {
            Ok(true) => {
                log::info!("joined game {}", game_id);
                self.reset().await;
                self.start_session(game_id, Color::SECOND).await;
            }
            Ok(false) => {
                log::info!("authority refused seat in game {}", game_id);
                self.renderer.notice("Could not join game");
            }
            Err(e) => {
                log::warn!("join game {} failed: {:#}", game_id, e);
                self.renderer.notice("Could not join game");
            }
        }
    }

    async fn start_session(&mut self, game_id: GameId, local_color: Color) {
        if let Err(e) = self.channel.connect(&game_id).await {
            log::warn!("connecting to game {} failed: {:#}", game_id, e);
            self.renderer.notice("Could not connect to game");
            return;
        }
        self.session = Some(GameSession::new(game_id, local_color));
    }

    /// Drop the session and every visual. The channel is closed.
    pub async fn reset(&mut self) {
        self.channel.disconnect().await;
        self.animator.cancel();
        self.selection.clear();
        self.board = None;
        self.session = None;
        self.renderer.clear();
    }

    fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.renderer.highlight(None);
            self.renderer.clear_candidates();
        }
    }

    /// Piece click: replace the selection and show candidates for own pieces.
    ///
    /// Nothing is selected unless the local player holds the turn.
    pub fn select(&mut self, square: Square) -> bool {
        self.clear_selection();
        let local = self
            .session
            .as_ref()
            .filter(|s| s.is_local_turn())
            .map(|s| s.local_color);
        if local.is_none() {
            log::debug!("not our turn, ignoring selection of {}", square);
            return false;
        }
        let Some(board) = self.board.as_ref() else {
            return false;
        };
        if !self.selection.select(square, board, local, &self.advisor) {
            log::debug!("ignoring selection of {}", square);
            return false;
        }
        self.renderer.highlight(Some(square));
        self.renderer
            .show_candidates(square, self.selection.candidates());
        true
    }

    async fn click(&mut self, square: Square) {
        if self.selection.is_candidate(square) {
            self.marker_clicked(square).await;
            return;
        }
        let owned = matches!(
            (self.board.as_ref().and_then(|b| b.get(square)), self.local_color()),
            (Some(piece), Some(color)) if piece.color == color
        );
        if owned {
            self.select(square);
        }
    }

    async fn marker_clicked(&mut self, target: Square) {
        let Some(origin) = self.selection.selected() else {
            return;
        };
        if !self.selection.is_candidate(target) {
            return;
        }
        self.clear_selection();
        self.submit(origin, target).await;
    }

    /// Emit a move intent if the local player holds the turn.
    ///
    /// Out-of-turn intents are dropped, not queued. The board is never
    /// changed here; it only moves when the authority pushes a snapshot.
    pub async fn submit(&mut self, start: Square, end: Square) -> bool {
        let Some(session) = self.session.as_ref() else {
            log::debug!("no session, dropping move {} -> {}", start, end);
            return false;
        };
        if !session.is_local_turn() {
            log::debug!("not our turn, dropping move {} -> {}", start, end);
            return false;
        }
        let game_id = session.game_id.clone();
        match self.channel.make_move(&game_id, MoveStep::new(start, end)).await {
            Ok(()) => {
                log::debug!("submitted move {} -> {}", start, end);
                true
            }
            Err(e) => {
                log::warn!("sending move failed: {:#}", e);
                self.renderer.notice("Could not send move");
                false
            }
        }
    }

    fn apply_push(&mut self, push: Push, now: Instant) {
        match self.session.as_ref() {
            Some(session) if session.game_id == push.game_id => {}
            Some(session) => {
                log::debug!(
                    "dropping stale push for game {} (current game {})",
                    push.game_id,
                    session.game_id
                );
                return;
            }
            None => {
                log::warn!("push for game {} without a session, ignoring", push.game_id);
                return;
            }
        }
        match push.event {
            ServerEvent::PlayerJoined {
                board,
                current_player,
            } => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                session.current_turn = Some(current_player);
                let local = session.local_color;
                self.animator.cancel();
                self.clear_selection();
                self.board = Some(board);
                self.renderer.render(Some(&board), Some(local));
                self.renderer
                    .set_status(&format!("Game started! {} moves first.", current_player));
            }
            ServerEvent::MoveApplied {
                moves,
                board,
                current_player,
                winner,
            } => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                session.current_turn = Some(current_player);
                session.winner = winner;
                let local = session.local_color;
                log::debug!("replaying {} step(s)", moves.len());
                self.clear_selection();
                self.board = Some(board);
                self.animator
                    .start(moves, board, Some(local), now, &mut self.renderer);
                let status = match winner {
                    Some(w) => format!("Game over: {} wins", w),
                    None => format!("{} to move", current_player),
                };
                self.renderer.set_status(&status);
            }
            ServerEvent::MoveRejected { reason } => {
                log::warn!("move rejected: {}", reason);
                self.renderer
                    .set_status(&format!("Move rejected: {}", reason));
            }
            ServerEvent::Disconnected { reason } => {
                self.renderer
                    .notice(&format!("Connection lost: {}", reason));
            }
        }
    }
}
