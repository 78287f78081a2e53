//! TCP front end for the hold'em engine.
//!
//! One table per process. Every seat listens on its own port
//! (`base_port + seat`) and the server waits for all seats to connect
//! before play can start, mirroring the fixed-port lobby of the original
//! service. Wire format is one JSON object per line in both directions.

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::info;

use holdem_engine::history::HandLogger;

pub mod config;
pub mod connection;
pub mod logging;
pub mod runner;

pub use config::ServerConfig;

use runner::TableRunner;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("failed to accept on {addr}: {source}")]
    Accept {
        addr: String,
        source: std::io::Error,
    },
    #[error("failed to open history file: {0}")]
    History(std::io::Error),
}

/// Runs one table to completion: accept every seat, play until the table
/// halts, then flush the remaining outbound packets.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let seed = match config.seed() {
        Some(seed) => seed,
        None => wall_clock_seed(),
    };
    info!(seed, seats = config.seats(), "starting table");

    let logger = match config.history_path() {
        Some(path) => Some(HandLogger::create(path).map_err(ServerError::History)?),
        None => None,
    };

    let (event_tx, event_rx) = mpsc::channel(64);
    let mut packet_txs = Vec::with_capacity(config.seats());
    let mut writers = Vec::with_capacity(config.seats());

    // Seats connect in order, one listener each. A listener is dropped as
    // soon as its player is in, so each port accepts exactly one client.
    for seat in 0..config.seats() {
        let addr = format!("{}:{}", config.host(), config.base_port() + seat as u16);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        info!(seat, %addr, "waiting for player");
        let (stream, peer) = listener
            .accept()
            .await
            .map_err(|source| ServerError::Accept {
                addr: addr.clone(),
                source,
            })?;
        info!(seat, %peer, "player connected");

        let (packet_tx, packet_rx) = mpsc::channel(64);
        writers.push(connection::spawn_seat(
            seat,
            stream,
            event_tx.clone(),
            packet_rx,
        ));
        packet_txs.push(packet_tx);
    }
    // The runner must see the channel close when the last reader exits.
    drop(event_tx);

    let runner = TableRunner::new(
        config.table_config(seed),
        event_rx,
        packet_txs,
        config.turn_timeout(),
        logger,
    );
    runner.run().await;

    for writer in writers {
        let _ = writer.await;
    }
    info!("table finished");
    Ok(())
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
