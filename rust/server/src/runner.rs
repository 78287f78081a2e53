use tokio::sync::mpsc;
use tokio::time::{sleep_until, Duration, Instant};
use tracing::{debug, info, warn};

use holdem_engine::history::HandLogger;
use holdem_engine::protocol::{ClientAction, Outbound, ServerPacket};
use holdem_engine::state::Stage;
use holdem_engine::table::{Table, TableConfig};

/// What the transport can tell the engine about one seat.
#[derive(Debug)]
pub enum SeatEvent {
    /// A decoded action from the player.
    Action(ClientAction),
    /// Bytes arrived but did not decode to any action.
    Malformed,
    /// The connection is gone.
    Disconnected,
}

enum Waited {
    Event(Option<(usize, SeatEvent)>),
    TimedOut,
}

/// The single owner of one [`Table`].
///
/// Seat tasks funnel events into one channel; this actor applies them in
/// arrival order and fans the resulting packets back out, so the engine
/// sees exactly one writer. The optional per-turn timeout only runs while
/// a betting stage waits on the seat to act, and expiring is delivered to
/// the engine as a disconnect of that seat.
pub struct TableRunner {
    table: Table,
    inbound: mpsc::Receiver<(usize, SeatEvent)>,
    outbound: Vec<mpsc::Sender<ServerPacket>>,
    turn_timeout: Option<Duration>,
    logger: Option<HandLogger>,
    /// Which (stage, seat) wait the current deadline belongs to.
    wait_key: Option<(Stage, usize)>,
    deadline: Option<Instant>,
}

impl TableRunner {
    pub fn new(
        cfg: TableConfig,
        inbound: mpsc::Receiver<(usize, SeatEvent)>,
        outbound: Vec<mpsc::Sender<ServerPacket>>,
        turn_timeout: Option<Duration>,
        logger: Option<HandLogger>,
    ) -> Self {
        Self {
            table: Table::new(&cfg),
            inbound,
            outbound,
            turn_timeout,
            logger,
            wait_key: None,
            deadline: None,
        }
    }

    pub async fn run(mut self) {
        self.update_deadline();
        loop {
            let waited = match self.deadline {
                Some(deadline) => tokio::select! {
                    ev = self.inbound.recv() => Waited::Event(ev),
                    _ = sleep_until(deadline) => Waited::TimedOut,
                },
                None => Waited::Event(self.inbound.recv().await),
            };

            let out = match waited {
                Waited::TimedOut => {
                    let seat = self.table.state().current_seat;
                    warn!(seat, "turn timed out, treating seat as disconnected");
                    self.table.seat_left(seat)
                }
                Waited::Event(None) => {
                    debug!("all seat tasks gone, stopping");
                    break;
                }
                Waited::Event(Some((seat, SeatEvent::Action(action)))) => {
                    debug!(seat, ?action, "action received");
                    match self.table.handle(seat, action) {
                        Ok(out) => out,
                        Err(_) => break,
                    }
                }
                Waited::Event(Some((seat, SeatEvent::Malformed))) => {
                    vec![Outbound::new(seat, ServerPacket::Nack)]
                }
                Waited::Event(Some((seat, SeatEvent::Disconnected))) => {
                    info!(seat, "seat disconnected");
                    self.table.seat_left(seat)
                }
            };

            self.dispatch(out).await;
            self.drain_history();
            if self.table.is_halted() {
                info!("table halted");
                break;
            }
            self.update_deadline();
        }
    }

    async fn dispatch(&mut self, out: Vec<Outbound>) {
        for Outbound { seat, packet } in out {
            if let Some(tx) = self.outbound.get(seat) {
                if tx.send(packet).await.is_err() {
                    debug!(seat, "outbound channel closed");
                }
            }
        }
    }

    fn drain_history(&mut self) {
        for mut record in self.table.take_finished_hands() {
            if let Some(logger) = &mut self.logger {
                record.hand_id = logger.next_id();
                if let Err(e) = logger.write(&record) {
                    warn!(error = %e, "failed to write hand record");
                }
            }
        }
    }

    /// Re-arm or clear the turn deadline. The clock starts when the engine
    /// begins waiting on a new (stage, seat) pair and keeps running across
    /// that seat's rejected attempts.
    fn update_deadline(&mut self) {
        let stage = self.table.state().stage;
        match self.turn_timeout {
            Some(t) if stage.is_betting() => {
                let key = (stage, self.table.state().current_seat);
                if self.wait_key != Some(key) {
                    self.wait_key = Some(key);
                    self.deadline = Some(Instant::now() + t);
                }
            }
            _ => {
                self.wait_key = None;
                self.deadline = None;
            }
        }
    }
}
