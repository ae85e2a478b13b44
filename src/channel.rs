//! Connection to the remote authority.
//!
//! One-shot requests (create, join) each use a short-lived connection. The
//! persistent channel is a separate connection whose incoming half is pumped
//! by a background task into an event queue.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};

use crate::board::Board;
use crate::common::{Color, MoveStep};
use crate::config::REQUEST_TIMEOUT_MS;
use crate::protocol::{GameId, Message};
use crate::transport::{Connector, MessageSink, MessageSource};

/// Authoritative pushes delivered to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Exactly one per successful join, carrying the starting snapshot.
    PlayerJoined { board: Board, current_player: Color },
    /// Zero or more intermediate steps plus the final snapshot.
    MoveApplied {
        moves: Vec<MoveStep>,
        board: Board,
        current_player: Color,
        winner: Option<Color>,
    },
    /// The authority refused the last submitted intent.
    MoveRejected { reason: String },
    /// The persistent channel failed.
    Disconnected { reason: String },
}

impl ServerEvent {
    /// Translate a pushed wire message; `None` for messages that are not pushes.
    pub fn from_message(msg: Message) -> Option<Self> {
        match msg {
            Message::PlayerJoined {
                board,
                current_player,
            } => Some(ServerEvent::PlayerJoined {
                board,
                current_player,
            }),
            Message::MoveMade {
                moves,
                board,
                current_player,
                winner,
            } => Some(ServerEvent::MoveApplied {
                moves,
                board,
                current_player,
                winner,
            }),
            Message::MoveError { error } => Some(ServerEvent::MoveRejected { reason: error }),
            _ => None,
        }
    }
}

/// A [`ServerEvent`] tagged with the game whose persistent channel delivered it.
///
/// The controller drops pushes whose game is not the current session, so a
/// pump that outlives its session cannot leak into the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Push {
    pub game_id: GameId,
    pub event: ServerEvent,
}

impl Push {
    pub fn new(game_id: GameId, event: ServerEvent) -> Self {
        Self { game_id, event }
    }
}

/// Everything the controller needs from the authority.
#[async_trait::async_trait]
pub trait SyncChannel: Send {
    /// Ask for a new game. The caller becomes the first color.
    async fn create_game(&mut self) -> anyhow::Result<GameId>;
    /// Ask for the second seat of `game_id`.
    async fn join_game(&mut self, game_id: &GameId) -> anyhow::Result<bool>;
    /// Announce presence on the persistent channel and start receiving pushes.
    async fn connect(&mut self, game_id: &GameId) -> anyhow::Result<()>;
    /// Emit a move intent.
    async fn make_move(&mut self, game_id: &GameId, step: MoveStep) -> anyhow::Result<()>;
    /// Close the persistent channel. Pushes stop arriving.
    async fn disconnect(&mut self);
}

/// [`SyncChannel`] over any [`Connector`].
pub struct RemoteChannel<C: Connector> {
    connector: C,
    pushes: UnboundedSender<Push>,
    outbound: Option<Box<dyn MessageSink>>,
    pump: Option<JoinHandle<()>>,
    request_timeout: Duration,
}

impl<C: Connector> RemoteChannel<C> {
    pub fn new(connector: C, pushes: UnboundedSender<Push>) -> Self {
        Self {
            connector,
            pushes,
            outbound: None,
            pump: None,
            request_timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.outbound.is_some()
    }

    fn stop_pump(&mut self) {
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
        self.outbound = None;
    }
}

async fn request<C: Connector>(
    connector: &C,
    request_timeout: Duration,
    msg: Message,
) -> anyhow::Result<Message> {
    let kind = msg.kind();
    let round_trip = async {
        let mut transport = connector.open().await?;
        transport.request(msg).await
    };
    timeout(request_timeout, round_trip)
        .await
        .map_err(|_| anyhow::anyhow!("{} timed out after {:?}", kind, request_timeout))?
}

async fn pump(
    mut source: Box<dyn MessageSource>,
    game_id: GameId,
    pushes: UnboundedSender<Push>,
) {
    loop {
        match source.recv().await {
            Ok(msg) => {
                let kind = msg.kind();
                match ServerEvent::from_message(msg) {
                    Some(event) => {
                        log::debug!("push received for game {}: {}", game_id, kind);
                        if pushes.send(Push::new(game_id.clone(), event)).is_err() {
                            return;
                        }
                    }
                    None => log::warn!("ignoring unexpected {} on persistent channel", kind),
                }
            }
            Err(e) => {
                log::warn!("persistent channel for game {} closed: {}", game_id, e);
                let event = ServerEvent::Disconnected {
                    reason: e.to_string(),
                };
                let _ = pushes.send(Push::new(game_id, event));
                return;
            }
        }
    }
}

#[async_trait::async_trait]
impl<C: Connector> SyncChannel for RemoteChannel<C> {
    async fn create_game(&mut self) -> anyhow::Result<GameId> {
        match request(&self.connector, self.request_timeout, Message::CreateGame).await? {
            Message::GameCreated { game_id } => Ok(game_id),
            other => Err(anyhow::anyhow!(
                "Expected game_created, got {}",
                other.kind()
            )),
        }
    }

    async fn join_game(&mut self, game_id: &GameId) -> anyhow::Result<bool> {
        let msg = Message::JoinRequest {
            game_id: game_id.clone(),
        };
        let reply = request(&self.connector, self.request_timeout, msg).await?;
        match reply {
            Message::JoinResponse { success } => Ok(success),
            other => Err(anyhow::anyhow!(
                "Expected join_response, got {}",
                other.kind()
            )),
        }
    }

    async fn connect(&mut self, game_id: &GameId) -> anyhow::Result<()> {
        self.stop_pump();
        let mut transport = self.connector.open().await?;
        transport
            .send(Message::JoinGame {
                game_id: game_id.clone(),
            })
            .await?;
        let (sink, source) = transport.split();
        self.outbound = Some(sink);
        self.pump = Some(tokio::spawn(pump(
            source,
            game_id.clone(),
            self.pushes.clone(),
        )));
        log::info!("connected to game {}", game_id);
        Ok(())
    }

    async fn make_move(&mut self, game_id: &GameId, step: MoveStep) -> anyhow::Result<()> {
        let sink = self
            .outbound
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Not connected to a game"))?;
        sink.send(Message::MakeMove {
            game_id: game_id.clone(),
            start: step.start,
            end: step.end,
        })
        .await
    }

    async fn disconnect(&mut self) {
        self.stop_pump();
    }
}

impl<C: Connector> Drop for RemoteChannel<C> {
    fn drop(&mut self) {
        self.stop_pump();
    }
}
