//! Message transports.
//!
//! A [`Transport`] is a connection split into an outgoing [`MessageSink`]
//! and an incoming [`MessageSource`], so that one task can keep reading
//! pushes while another writes intents.

use crate::protocol::Message;

pub mod frame;
pub mod in_memory;
pub mod tcp;

#[async_trait::async_trait]
pub trait MessageSink: Send {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait MessageSource: Send {
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

/// Both halves of an open connection.
pub struct Transport {
    sink: Box<dyn MessageSink>,
    source: Box<dyn MessageSource>,
}

impl Transport {
    pub fn new(sink: Box<dyn MessageSink>, source: Box<dyn MessageSource>) -> Self {
        Self { sink, source }
    }

    pub async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.sink.send(msg).await
    }

    pub async fn recv(&mut self) -> anyhow::Result<Message> {
        self.source.recv().await
    }

    /// Send one request and wait for the next incoming message.
    pub async fn request(&mut self, msg: Message) -> anyhow::Result<Message> {
        self.send(msg).await?;
        self.recv().await
    }

    pub fn split(self) -> (Box<dyn MessageSink>, Box<dyn MessageSource>) {
        (self.sink, self.source)
    }
}

/// Opens new connections to the authority.
#[async_trait::async_trait]
pub trait Connector: Send + Sync {
    async fn open(&self) -> anyhow::Result<Transport>;
}
