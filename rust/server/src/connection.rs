use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use holdem_engine::protocol::{ClientAction, ServerPacket};

use crate::runner::SeatEvent;

/// Splits one player's connection into a reader and a writer task.
///
/// Framing is newline-delimited JSON both ways. The reader forwards decoded
/// actions (and a final `Disconnected`) into the table actor's channel; the
/// writer drains that seat's outbound packets. Returns the writer handle so
/// shutdown can wait for the last packets (HALT included) to flush.
pub fn spawn_seat(
    seat: usize,
    stream: TcpStream,
    events: mpsc::Sender<(usize, SeatEvent)>,
    packets: mpsc::Receiver<ServerPacket>,
) -> JoinHandle<()> {
    let (read_half, write_half) = stream.into_split();
    tokio::spawn(read_loop(seat, read_half, events));
    tokio::spawn(write_loop(seat, write_half, packets))
}

async fn read_loop(
    seat: usize,
    read_half: OwnedReadHalf,
    events: mpsc::Sender<(usize, SeatEvent)>,
) {
    let mut lines = BufReader::new(read_half).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                // An undecodable line is still "this seat said something":
                // the actor answers it with a NACK, same as an unknown
                // packet type in the original protocol.
                let event = match serde_json::from_str::<ClientAction>(line) {
                    Ok(action) => SeatEvent::Action(action),
                    Err(e) => {
                        debug!(seat, error = %e, "undecodable line");
                        SeatEvent::Malformed
                    }
                };
                if events.send((seat, event)).await.is_err() {
                    return;
                }
            }
            Ok(None) | Err(_) => break,
        }
    }
    let _ = events.send((seat, SeatEvent::Disconnected)).await;
}

async fn write_loop(
    seat: usize,
    mut write_half: OwnedWriteHalf,
    mut packets: mpsc::Receiver<ServerPacket>,
) {
    while let Some(packet) = packets.recv().await {
        let mut line = match serde_json::to_string(&packet) {
            Ok(line) => line,
            Err(e) => {
                debug!(seat, error = %e, "unserializable packet");
                continue;
            }
        };
        line.push('\n');
        if write_half.write_all(line.as_bytes()).await.is_err() {
            debug!(seat, "write failed, closing outbound");
            break;
        }
    }
    let _ = write_half.shutdown().await;
}
