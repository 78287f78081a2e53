use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::state::{SeatStatus, COMMUNITY_SLOTS};

/// Inbound action, already decoded by the transport and tagged with the
/// originating seat by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientAction {
    /// Take part in the table (JOIN stage only).
    Join,
    /// Confirm for the next hand after a showdown (INIT stage only).
    Ready,
    /// Depart the table permanently. Legal at any time.
    Leave,
    Check,
    Call,
    /// Raise the table bet by this amount on top of the call.
    Raise(i32),
    Fold,
}

/// Outbound packet for one seat. Framing and byte order are the transport's
/// concern; the engine only promises these fields and stable tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerPacket {
    /// Action accepted.
    Ack,
    /// Action rejected; no state changed, same seat remains to act.
    Nack,
    /// Per-seat view of the table, sent to the seat whose turn it is.
    Info(InfoView),
    /// Showdown result, sent to every seat still connected.
    End(EndView),
    /// The table is terminating.
    Halt,
}

/// What one seat is allowed to see mid-hand: its own hole cards, the board
/// revealed so far (`None` = concealed slot), and public seat data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoView {
    pub hole: [Option<Card>; 2],
    pub community: [Option<Card>; COMMUNITY_SLOTS],
    pub seats: Vec<SeatView>,
    pub pot: u32,
    pub dealer: usize,
    pub to_act: usize,
    pub highest_bet: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub stack: u32,
    pub bet: u32,
    pub status: SeatStatus,
}

/// Showdown disclosure: every seat's hole cards, the board, and the winner.
/// `pot` is the amount awarded; stacks are post-payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndView {
    pub seats: Vec<SeatResult>,
    pub community: [Option<Card>; COMMUNITY_SLOTS],
    pub pot: u32,
    pub dealer: usize,
    pub winner: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatResult {
    pub hole: [Option<Card>; 2],
    pub stack: u32,
    pub status: SeatStatus,
}

/// A packet addressed to one seat, produced by the round controller for the
/// transport to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub seat: usize,
    pub packet: ServerPacket,
}

impl Outbound {
    pub fn new(seat: usize, packet: ServerPacket) -> Self {
        Self { seat, packet }
    }
}
