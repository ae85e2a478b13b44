use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration};

use crate::config::{MAX_FRAME_SIZE, REQUEST_TIMEOUT_MS};
use crate::protocol::Message;
use crate::transport::frame::{read_frame, write_frame};
use crate::transport::{Connector, MessageSink, MessageSource, Transport};

/// Default timeout for establishing a connection.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(REQUEST_TIMEOUT_MS);

pub struct TcpSink {
    writer: OwnedWriteHalf,
    max_message_size: u32,
}

pub struct TcpSource {
    reader: OwnedReadHalf,
    max_message_size: u32,
}

#[async_trait::async_trait]
impl MessageSink for TcpSink {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        write_frame(&mut self.writer, &msg, self.max_message_size).await
    }
}

#[async_trait::async_trait]
impl MessageSource for TcpSource {
    async fn recv(&mut self) -> anyhow::Result<Message> {
        read_frame(&mut self.reader, self.max_message_size).await
    }
}

/// Wrap an established stream. Used by the client and by test authorities.
pub fn tcp_transport(stream: TcpStream) -> Transport {
    tcp_transport_with_limit(stream, MAX_FRAME_SIZE)
}

pub fn tcp_transport_with_limit(stream: TcpStream, max_message_size: u32) -> Transport {
    if let Err(e) = stream.set_nodelay(true) {
        log::debug!("could not disable Nagle on {:?}: {}", stream.peer_addr().ok(), e);
    }
    let (reader, writer) = stream.into_split();
    Transport::new(
        Box::new(TcpSink {
            writer,
            max_message_size,
        }),
        Box::new(TcpSource {
            reader,
            max_message_size,
        }),
    )
}

/// Opens framed TCP connections to a fixed authority address.
#[derive(Debug, Clone)]
pub struct TcpConnector {
    addr: String,
    timeout_duration: Duration,
    max_message_size: u32,
}

impl TcpConnector {
    pub fn new(addr: impl Into<String>) -> Self {
        Self::with_timeout(addr, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(addr: impl Into<String>, timeout_duration: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout_duration,
            max_message_size: MAX_FRAME_SIZE,
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

#[async_trait::async_trait]
impl Connector for TcpConnector {
    async fn open(&self) -> anyhow::Result<Transport> {
        let stream = timeout(self.timeout_duration, TcpStream::connect(&self.addr))
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "Connect to {} timed out after {:?}",
                    self.addr,
                    self.timeout_duration
                )
            })?
            .map_err(|e| anyhow::anyhow!("Connect to {} failed: {}", self.addr, e))?;
        Ok(tcp_transport_with_limit(stream, self.max_message_size))
    }
}
