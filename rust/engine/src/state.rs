use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;

/// Number of community card slots on the board.
pub const COMMUNITY_SLOTS: usize = 5;

/// Seat status for the lifetime of a table.
/// Folded is per-hand and recovers to Active between hands; Left is permanent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SeatStatus {
    Active,
    Folded,
    Left,
}

/// One table position: chips, per-street commitment, and hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Chips owned, never negative; debited exactly by what an action commits.
    pub stack: u32,
    /// Chips committed this betting round; reset only when a street opens.
    pub bet: u32,
    pub status: SeatStatus,
    pub hole: [Option<Card>; 2],
    /// Whether this seat has acted since the current street opened.
    pub acted: bool,
}

impl Seat {
    pub fn new(stack: u32) -> Self {
        Self {
            stack,
            bet: 0,
            status: SeatStatus::Active,
            hole: [None, None],
            acted: false,
        }
    }
}

/// Round stage. JOIN and INIT wait on out-of-band confirmations; the four
/// betting stages share one loop shape and differ only in board reveals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Join,
    Init,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    pub fn is_betting(self) -> bool {
        matches!(self, Stage::Preflop | Stage::Flop | Stage::Turn | Stage::River)
    }
}

/// The authoritative state of one table, exclusively owned and mutated by
/// the round controller. Validator and evaluator only borrow it.
#[derive(Debug)]
pub struct GameState {
    pub seats: Vec<Seat>,
    pub community: [Option<Card>; COMMUNITY_SLOTS],
    /// Total chips at stake this hand; non-decreasing until showdown payout.
    pub pot: u32,
    /// Largest per-seat commitment this street; the call target.
    pub highest_bet: u32,
    pub current_seat: usize,
    pub dealer: usize,
    pub stage: Stage,
    pub deck: Deck,
}

impl GameState {
    pub fn new(seats: usize, starting_stack: u32, seed: u64) -> Self {
        Self {
            seats: (0..seats).map(|_| Seat::new(starting_stack)).collect(),
            community: [None; COMMUNITY_SLOTS],
            pot: 0,
            highest_bet: 0,
            current_seat: 0,
            dealer: 0,
            stage: Stage::Join,
            deck: Deck::new_with_seed(seed),
        }
    }

    pub fn active_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.status == SeatStatus::Active)
            .count()
    }

    /// The sole remaining active seat, if betting has folded down to one.
    pub fn last_active(&self) -> Option<usize> {
        let mut it = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.status == SeatStatus::Active)
            .map(|(i, _)| i);
        match (it.next(), it.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        }
    }

    /// Next active seat strictly after `seat`, wrapping modulo seat count.
    pub fn next_active_after(&self, seat: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|step| (seat + step) % n)
            .find(|&i| self.seats[i].status == SeatStatus::Active)
    }

    /// A betting round is closed once every active seat has acted since the
    /// street opened and matches the table bet. The acted requirement keeps
    /// a fresh street (all bets zero) open until everyone has spoken.
    pub fn betting_closed(&self) -> bool {
        self.seats
            .iter()
            .filter(|s| s.status == SeatStatus::Active)
            .all(|s| s.acted && s.bet == self.highest_bet)
    }

    /// Opens a new betting street: commitments and acted flags reset, the
    /// call target drops to zero. Pot carries over untouched.
    pub fn open_street(&mut self) {
        for seat in &mut self.seats {
            seat.bet = 0;
            seat.acted = false;
        }
        self.highest_bet = 0;
    }

    pub fn revealed_community(&self) -> Vec<Card> {
        self.community.iter().flatten().copied().collect()
    }
}
