use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::time::timeout;

use holdem_engine::protocol::{ClientAction, ServerPacket};
use holdem_server::connection::spawn_seat;
use holdem_server::runner::SeatEvent;

async fn socket_pair() -> (TcpStream, TcpStream) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let client = TcpStream::connect(addr).await.unwrap();
    let (server, _) = listener.accept().await.unwrap();
    (client, server)
}

#[tokio::test]
async fn decoded_lines_become_seat_events() {
    let (mut client, server) = socket_pair().await;
    let (event_tx, mut event_rx) = mpsc::channel(8);
    let (_packet_tx, packet_rx) = mpsc::channel::<ServerPacket>(8);
    let _writer = spawn_seat(3, server, event_tx, packet_rx);

    client.write_all(b"\"Join\"\n").await.unwrap();
    client.write_all(b"{\"Raise\":10}\n").await.unwrap();

    let (seat, event) = timeout(Duration::from_secs(2), event_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(seat, 3);
    assert!(matches!(event, SeatEvent::Action(ClientAction::Join)));

    let (_, event) = event_rx.recv().await.unwrap();
    assert!(matches!(
        event,
        SeatEvent::Action(ClientAction::Raise(10))
    ));
}

#[tokio::test]
async fn garbage_lines_are_reported_as_malformed() {
    let (mut client, server) = socket_pair().await;
    let (event_tx, mut event_rx) = mpsc::channel(8);
    let (_packet_tx, packet_rx) = mpsc::channel::<ServerPacket>(8);
    let _writer = spawn_seat(0, server, event_tx, packet_rx);

    client.write_all(b"not json at all\n").await.unwrap();
    let (_, event) = timeout(Duration::from_secs(2), event_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, SeatEvent::Malformed));
}

#[tokio::test]
async fn outbound_packets_arrive_as_json_lines() {
    let (client, server) = socket_pair().await;
    let (event_tx, _event_rx) = mpsc::channel(8);
    let (packet_tx, packet_rx) = mpsc::channel(8);
    let _writer = spawn_seat(0, server, event_tx, packet_rx);

    packet_tx.send(ServerPacket::Ack).await.unwrap();
    packet_tx.send(ServerPacket::Halt).await.unwrap();

    let mut lines = BufReader::new(client).lines();
    let first = timeout(Duration::from_secs(2), lines.next_line())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(
        serde_json::from_str::<ServerPacket>(&first).unwrap(),
        ServerPacket::Ack
    );
    let second = lines.next_line().await.unwrap().unwrap();
    assert_eq!(
        serde_json::from_str::<ServerPacket>(&second).unwrap(),
        ServerPacket::Halt
    );
}

#[tokio::test]
async fn closing_the_socket_signals_a_disconnect() {
    let (client, server) = socket_pair().await;
    let (event_tx, mut event_rx) = mpsc::channel(8);
    let (_packet_tx, packet_rx) = mpsc::channel::<ServerPacket>(8);
    let _writer = spawn_seat(1, server, event_tx, packet_rx);

    drop(client);
    let (seat, event) = timeout(Duration::from_secs(2), event_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(seat, 1);
    assert!(matches!(event, SeatEvent::Disconnected));
}
