use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use holdem_engine::protocol::{ClientAction, ServerPacket};
use holdem_engine::table::TableConfig;
use holdem_server::runner::{SeatEvent, TableRunner};

struct Harness {
    events: mpsc::Sender<(usize, SeatEvent)>,
    packets: Vec<mpsc::Receiver<ServerPacket>>,
    runner: JoinHandle<()>,
}

fn start(seats: usize, turn_timeout: Option<Duration>) -> Harness {
    let cfg = TableConfig {
        seats,
        starting_stack: 100,
        seed: 7,
        reject_limit: None,
    };
    let (event_tx, event_rx) = mpsc::channel(16);
    let mut packet_txs = Vec::new();
    let mut packet_rxs = Vec::new();
    for _ in 0..seats {
        let (tx, rx) = mpsc::channel(16);
        packet_txs.push(tx);
        packet_rxs.push(rx);
    }
    let runner = TableRunner::new(cfg, event_rx, packet_txs, turn_timeout, None);
    Harness {
        events: event_tx,
        packets: packet_rxs,
        runner: tokio::spawn(runner.run()),
    }
}

impl Harness {
    async fn send(&self, seat: usize, action: ClientAction) {
        self.events
            .send((seat, SeatEvent::Action(action)))
            .await
            .unwrap();
    }

    async fn recv(&mut self, seat: usize) -> ServerPacket {
        timeout(Duration::from_secs(2), self.packets[seat].recv())
            .await
            .expect("timed out waiting for a packet")
            .expect("seat channel closed")
    }
}

#[tokio::test]
async fn join_flow_deals_the_first_hand() {
    let mut h = start(2, None);
    h.send(0, ClientAction::Join).await;
    h.send(1, ClientAction::Join).await;

    // Two seats: the dealer rotates to seat 1, so seat 0 acts first.
    match h.recv(0).await {
        ServerPacket::Info(view) => {
            assert_eq!(view.to_act, 0);
            assert_eq!(view.dealer, 1);
            assert!(view.hole.iter().all(|c| c.is_some()));
            assert!(view.community.iter().all(|c| c.is_none()));
        }
        other => panic!("expected INFO, got {other:?}"),
    }
    h.runner.abort();
}

#[tokio::test]
async fn fold_resolves_the_hand_and_ready_starts_the_next() {
    let mut h = start(2, None);
    h.send(0, ClientAction::Join).await;
    h.send(1, ClientAction::Join).await;
    assert!(matches!(h.recv(0).await, ServerPacket::Info(_)));

    h.send(0, ClientAction::Fold).await;
    assert!(matches!(h.recv(0).await, ServerPacket::Ack));
    match h.recv(0).await {
        ServerPacket::End(end) => assert_eq!(end.winner, Some(1)),
        other => panic!("expected END, got {other:?}"),
    }
    assert!(matches!(h.recv(1).await, ServerPacket::End(_)));

    // Both seats confirm and a fresh hand begins with the dealer rotated
    // back to seat 0, so seat 1 acts first.
    h.send(0, ClientAction::Ready).await;
    h.send(1, ClientAction::Ready).await;
    match h.recv(1).await {
        ServerPacket::Info(view) => {
            assert_eq!(view.dealer, 0);
            assert_eq!(view.to_act, 1);
        }
        other => panic!("expected INFO, got {other:?}"),
    }
    h.runner.abort();
}

#[tokio::test]
async fn out_of_turn_action_is_rejected_without_advancing() {
    let mut h = start(2, None);
    h.send(0, ClientAction::Join).await;
    h.send(1, ClientAction::Join).await;
    assert!(matches!(h.recv(0).await, ServerPacket::Info(_)));

    h.send(1, ClientAction::Check).await;
    assert!(matches!(h.recv(1).await, ServerPacket::Nack));

    // Seat 0 is still to act and the hand proceeds normally.
    h.send(0, ClientAction::Check).await;
    assert!(matches!(h.recv(0).await, ServerPacket::Ack));
    assert!(matches!(h.recv(1).await, ServerPacket::Info(_)));
    h.runner.abort();
}

#[tokio::test]
async fn malformed_input_gets_a_nack() {
    let mut h = start(2, None);
    h.events.send((0, SeatEvent::Malformed)).await.unwrap();
    assert!(matches!(h.recv(0).await, ServerPacket::Nack));
    h.runner.abort();
}

#[tokio::test]
async fn turn_timeout_removes_the_seat_and_halts_a_two_seat_table() {
    let mut h = start(2, Some(Duration::from_millis(50)));
    h.send(0, ClientAction::Join).await;
    h.send(1, ClientAction::Join).await;
    assert!(matches!(h.recv(0).await, ServerPacket::Info(_)));

    // Seat 0 never acts: it is removed, seat 1 wins by default, and with
    // one player left the table halts.
    match h.recv(1).await {
        ServerPacket::End(end) => assert_eq!(end.winner, Some(1)),
        other => panic!("expected END, got {other:?}"),
    }
    assert!(matches!(h.recv(1).await, ServerPacket::Halt));
    timeout(Duration::from_secs(2), h.runner)
        .await
        .expect("runner did not stop")
        .unwrap();
}

#[tokio::test]
async fn disconnect_during_join_halts_a_two_seat_table() {
    let mut h = start(2, None);
    h.send(0, ClientAction::Join).await;
    h.events.send((1, SeatEvent::Disconnected)).await.unwrap();

    assert!(matches!(h.recv(0).await, ServerPacket::Halt));
    timeout(Duration::from_secs(2), h.runner)
        .await
        .expect("runner did not stop")
        .unwrap();
}
