use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::protocol::Message;
use crate::transport::{Connector, MessageSink, MessageSource, Transport};

pub struct InMemorySink {
    tx: UnboundedSender<Message>,
}

pub struct InMemorySource {
    rx: UnboundedReceiver<Message>,
}

#[async_trait::async_trait]
impl MessageSink for InMemorySink {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.tx
            .send(msg)
            .map_err(|_| anyhow::anyhow!("Connection closed by peer"))
    }
}

#[async_trait::async_trait]
impl MessageSource for InMemorySource {
    async fn recv(&mut self) -> anyhow::Result<Message> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Channel closed"))
    }
}

/// Two connected in-process transports: what one sends, the other receives.
pub fn pair() -> (Transport, Transport) {
    let (tx1, rx1) = unbounded_channel();
    let (tx2, rx2) = unbounded_channel();
    (
        Transport::new(
            Box::new(InMemorySink { tx: tx1 }),
            Box::new(InMemorySource { rx: rx2 }),
        ),
        Transport::new(
            Box::new(InMemorySink { tx: tx2 }),
            Box::new(InMemorySource { rx: rx1 }),
        ),
    )
}

/// Client side of an in-process authority: every `open` hands the far end to the listener.
#[derive(Clone)]
pub struct InMemoryConnector {
    incoming: UnboundedSender<Transport>,
}

/// Authority side: accepts the connections opened through the paired connector.
pub struct InMemoryListener {
    incoming: UnboundedReceiver<Transport>,
}

impl InMemoryListener {
    pub async fn accept(&mut self) -> anyhow::Result<Transport> {
        self.incoming
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("All connectors dropped"))
    }
}

pub fn listener() -> (InMemoryConnector, InMemoryListener) {
    let (incoming_tx, incoming_rx) = unbounded_channel();
    (
        InMemoryConnector {
            incoming: incoming_tx,
        },
        InMemoryListener {
            incoming: incoming_rx,
        },
    )
}

#[async_trait::async_trait]
impl Connector for InMemoryConnector {
    async fn open(&self) -> anyhow::Result<Transport> {
        let (local, remote) = pair();
        self.incoming
            .send(remote)
            .map_err(|_| anyhow::anyhow!("Connection refused: listener dropped"))?;
        Ok(local)
    }
}
