//! Length-prefixed bincode framing: a 4-byte big-endian length, then the payload.

use std::io::ErrorKind;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::protocol::Message;

fn read_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::UnexpectedEof => anyhow::anyhow!("Connection closed by peer"),
        ErrorKind::ConnectionReset => anyhow::anyhow!("Connection reset by peer"),
        _ => anyhow::anyhow!("Read error: {}", e),
    }
}

fn write_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => {
            anyhow::anyhow!("Connection closed by peer")
        }
        _ => anyhow::anyhow!("Write error: {}", e),
    }
}

/// Serialize `msg` and write it as one frame.
pub async fn write_frame<W>(writer: &mut W, msg: &Message, max_size: u32) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let data = bincode::serialize(msg).map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
    if data.len() as u64 > max_size as u64 {
        return Err(anyhow::anyhow!(
            "Message too large: {} bytes (max: {})",
            data.len(),
            max_size
        ));
    }
    let len = (data.len() as u32).to_be_bytes();
    writer.write_all(&len).await.map_err(write_error)?;
    writer.write_all(&data).await.map_err(write_error)?;
    writer.flush().await.map_err(write_error)?;
    Ok(())
}

/// Read one frame and decode it.
pub async fn read_frame<R>(reader: &mut R, max_size: u32) -> anyhow::Result<Message>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf).await.map_err(read_error)?;
    let len = u32::from_be_bytes(len_buf);
    if len == 0 {
        return Err(anyhow::anyhow!("Invalid message length: 0"));
    }
    if len > max_size {
        return Err(anyhow::anyhow!(
            "Message too large: {} bytes (max: {})",
            len,
            max_size
        ));
    }
    let mut buf = vec![0u8; len as usize];
    reader.read_exact(&mut buf).await.map_err(read_error)?;
    bincode::deserialize(&buf).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Color, MoveStep, Square};
    use crate::config::MAX_FRAME_SIZE;

    #[tokio::test]
    async fn frame_carries_board_push() -> anyhow::Result<()> {
        let (mut a, mut b) = tokio::io::duplex(64 * 1024);
        let msg = Message::MoveMade {
            moves: vec![MoveStep::new(Square::new(5, 0)?, Square::new(4, 1)?)],
            board: Board::standard(),
            current_player: Color::Black,
            winner: None,
        };
        write_frame(&mut a, &msg, MAX_FRAME_SIZE).await?;
        assert_eq!(read_frame(&mut b, MAX_FRAME_SIZE).await?, msg);
        Ok(())
    }

    #[tokio::test]
    async fn zero_length_is_rejected() {
        let (mut a, mut b) = tokio::io::duplex(64);
        a.write_all(&[0, 0, 0, 0]).await.unwrap();
        let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
        assert!(err.to_string().contains("length: 0"));
    }

    #[tokio::test]
    async fn oversized_length_is_rejected_before_reading_payload() {
        let (mut a, mut b) = tokio::io::duplex(64);
        a.write_all(&u32::MAX.to_be_bytes()).await.unwrap();
        let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[tokio::test]
    async fn square_out_of_range_fails_to_decode() {
        let (mut a, mut b) = tokio::io::duplex(256);
        let good = Message::MakeMove {
            game_id: crate::GameId::new("0"),
            start: Square::new(2, 1).unwrap(),
            end: Square::new(1, 0).unwrap(),
        };
        let mut bytes = bincode::serialize(&good).unwrap();
        // The start square's row is the byte after the id; push it off the board.
        let last = bytes.len() - 4;
        bytes[last] = 9;
        a.write_all(&(bytes.len() as u32).to_be_bytes()).await.unwrap();
        a.write_all(&bytes).await.unwrap();
        let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
        assert!(err.to_string().contains("Deserialization error"));
    }

    #[tokio::test]
    async fn truncated_payload_reports_closed_peer() {
        let (mut a, mut b) = tokio::io::duplex(64);
        a.write_all(&100u32.to_be_bytes()).await.unwrap();
        a.write_all(&[1, 2, 3]).await.unwrap();
        drop(a);
        let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
        assert!(err.to_string().contains("closed"));
    }
}
