use core::fmt;

use crate::board::Board;
use crate::common::{Color, MoveStep, Square};

/// Opaque game identifier handed out by the authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Messages exchanged between the client and the remote authority.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// Ask for a fresh game. The caller plays the first color.
    CreateGame,
    /// Reply to [`Message::CreateGame`].
    GameCreated { game_id: GameId },
    /// Ask to take the second seat of an existing game.
    JoinRequest { game_id: GameId },
    /// Reply to [`Message::JoinRequest`].
    JoinResponse { success: bool },
    /// Announce presence on the persistent channel for a game.
    JoinGame { game_id: GameId },
    /// Full starting snapshot, pushed once the game is joined.
    PlayerJoined { board: Board, current_player: Color },
    /// Move intent awaiting the authority's decision.
    MakeMove {
        game_id: GameId,
        start: Square,
        end: Square,
    },
    /// Applied turn: intermediate steps in order plus the mandatory final snapshot.
    MoveMade {
        moves: Vec<MoveStep>,
        board: Board,
        current_player: Color,
        winner: Option<Color>,
    },
    /// The authority refused the last intent.
    MoveError { error: String },
}

impl Message {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::CreateGame => "create_game",
            Message::GameCreated { .. } => "game_created",
            Message::JoinRequest { .. } => "join_request",
            Message::JoinResponse { .. } => "join_response",
            Message::JoinGame { .. } => "join_game",
            Message::PlayerJoined { .. } => "player_joined",
            Message::MakeMove { .. } => "make_move",
            Message::MoveMade { .. } => "move_made",
            Message::MoveError { .. } => "move_error",
        }
    }
}
