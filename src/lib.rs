#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod advisor;
mod board;
mod common;
pub mod config;
pub mod selection;

#[cfg(feature = "std")]
pub mod animator;
#[cfg(feature = "std")]
pub mod channel;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod controller;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
pub mod transport;

pub use advisor::{ForwardHints, MoveAdvisor, NoHints};
pub use board::Board;
pub use common::*;
pub use config::*;
pub use selection::SelectionState;

#[cfg(feature = "std")]
pub use animator::ReplayAnimator;
#[cfg(feature = "std")]
pub use channel::{Push, RemoteChannel, ServerEvent, SyncChannel};
#[cfg(feature = "std")]
pub use controller::{Controller, Event, GameSession};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use protocol::{GameId, Message};
#[cfg(feature = "std")]
pub use render::{BoardRenderer, Scene, TerminalRenderer};
