use holdem_engine::protocol::{ClientAction, EndView, Outbound, ServerPacket};
use holdem_engine::state::{SeatStatus, Stage};
use holdem_engine::table::{Table, TableConfig};

fn table(seats: usize) -> Table {
    Table::new(&TableConfig {
        seats,
        starting_stack: 100,
        seed: 7,
        reject_limit: None,
    })
}

fn join_all(table: &mut Table, seats: usize) {
    for seat in 0..seats {
        table.handle(seat, ClientAction::Join).unwrap();
    }
}

fn ends(out: &[Outbound]) -> Vec<(usize, &EndView)> {
    out.iter()
        .filter_map(|o| match &o.packet {
            ServerPacket::End(end) => Some((o.seat, end)),
            _ => None,
        })
        .collect()
}

#[test]
fn folding_down_to_one_seat_short_circuits_to_showdown() {
    let mut t = table(3);
    join_all(&mut t, 3);
    // Dealer rotates to seat 1, so seat 2 opens the betting.
    assert_eq!(t.state().dealer, 1);
    assert_eq!(t.state().current_seat, 2);

    t.handle(2, ClientAction::Fold).unwrap();
    let out = t.handle(0, ClientAction::Fold).unwrap();

    // Bets never equalized; the short-circuit fires on the second fold
    // and every still-seated player is told the result.
    let results = ends(&out);
    assert_eq!(results.len(), 3);
    for (_, end) in &results {
        assert_eq!(end.winner, Some(1));
    }
    assert!(!t.is_halted());
    assert_eq!(t.state().stage, Stage::Init);
}

#[test]
fn winner_collects_the_pot() {
    let mut t = table(2);
    join_all(&mut t, 2);

    t.handle(0, ClientAction::Raise(10)).unwrap();
    let out = t.handle(1, ClientAction::Fold).unwrap();

    let results = ends(&out);
    assert_eq!(results[0].1.winner, Some(0));
    assert_eq!(results[0].1.pot, 10);
    // Seat 0's 10 chips came straight back; seat 1 never paid.
    assert_eq!(results[0].1.seats[0].stack, 100);
    assert_eq!(results[0].1.seats[1].stack, 100);
    assert_eq!(t.state().pot, 0);
}

#[test]
fn folds_recover_to_active_between_hands() {
    let mut t = table(2);
    join_all(&mut t, 2);

    t.handle(0, ClientAction::Fold).unwrap();
    assert_eq!(t.state().stage, Stage::Init);
    assert!(t
        .state()
        .seats
        .iter()
        .all(|s| s.status == SeatStatus::Active));
    assert!(t.state().seats.iter().all(|s| s.bet == 0));
}

#[test]
fn ready_poll_starts_the_next_hand_with_a_rotated_dealer() {
    let mut t = table(2);
    join_all(&mut t, 2);
    assert_eq!(t.state().dealer, 1);

    t.handle(0, ClientAction::Fold).unwrap();
    t.handle(0, ClientAction::Ready).unwrap();
    let out = t.handle(1, ClientAction::Ready).unwrap();

    assert_eq!(t.state().stage, Stage::Preflop);
    assert_eq!(t.state().dealer, 0);
    assert_eq!(t.state().current_seat, 1);
    assert!(out
        .iter()
        .any(|o| o.seat == 1 && matches!(o.packet, ServerPacket::Info(_))));
}

#[test]
fn leave_between_hands_halts_when_the_next_hand_cannot_seat_two() {
    let mut t = table(2);
    join_all(&mut t, 2);
    t.handle(0, ClientAction::Fold).unwrap();

    t.handle(1, ClientAction::Leave).unwrap();
    let out = t.handle(0, ClientAction::Ready).unwrap();

    assert!(t.is_halted());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].seat, 0);
    assert!(matches!(out[0].packet, ServerPacket::Halt));
}

#[test]
fn finished_hand_records_capture_the_hand() {
    let mut t = table(2);
    join_all(&mut t, 2);

    t.handle(0, ClientAction::Raise(10)).unwrap();
    t.handle(1, ClientAction::Fold).unwrap();

    let records = t.take_finished_hands();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.winner, Some(0));
    assert_eq!(record.pot, 10);
    assert_eq!(record.seed, 7);
    assert_eq!(record.actions.len(), 2);
    assert_eq!(record.actions[0].action, ClientAction::Raise(10));
    assert_eq!(record.actions[1].action, ClientAction::Fold);
    // Drained once; nothing left behind.
    assert!(t.take_finished_hands().is_empty());
}
