//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardRenderer, Color, Controller, Event, ForwardHints, GameId, MoveAdvisor, MoveStep,
    Piece, Push, RemoteChannel, Scene, ServerEvent, Square, SyncChannel, TerminalRenderer,
};

pub use crate::transport::{
    in_memory::InMemoryConnector, tcp::TcpConnector, Connector, Transport,
};
