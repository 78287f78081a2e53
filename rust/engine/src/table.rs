use crate::cards::Card;
use crate::errors::TableError;
use crate::hand::{evaluate_hand, HandStrength};
use crate::history::{ActionRecord, HandRecord};
use crate::protocol::{
    ClientAction, EndView, InfoView, Outbound, SeatResult, SeatView, ServerPacket,
};
use crate::rules;
use crate::state::{GameState, SeatStatus, Stage};

/// Table initialization parameters.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub seats: usize,
    pub starting_stack: u32,
    pub seed: u64,
    /// Consecutive rejections of the seat to act before it is treated as
    /// departed. `None` retries forever.
    pub reject_limit: Option<u32>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: 6,
            starting_stack: 100,
            seed: 0,
            reject_limit: None,
        }
    }
}

/// The round controller: owns one table's [`GameState`] and drives the
/// JOIN → INIT → PREFLOP → FLOP → TURN → RIVER → SHOWDOWN cycle.
///
/// The controller never blocks. The transport feeds it one decoded action
/// (or a disconnect) at a time and delivers whatever packets come back;
/// everything between two calls is a plain state transition. Single-writer:
/// callers must serialize access, there is no interior locking.
#[derive(Debug)]
pub struct Table {
    state: GameState,
    reject_limit: Option<u32>,
    seed: u64,
    /// Seats still owing a response in the JOIN or INIT stages.
    pending: Vec<bool>,
    /// Consecutive rejections of the seat currently to act.
    rejects: u32,
    hand_no: u32,
    actions: Vec<ActionRecord>,
    finished: Vec<HandRecord>,
    halted: bool,
}

impl Table {
    pub fn new(cfg: &TableConfig) -> Self {
        Self {
            state: GameState::new(cfg.seats, cfg.starting_stack, cfg.seed),
            reject_limit: cfg.reject_limit,
            seed: cfg.seed,
            pending: vec![true; cfg.seats],
            rejects: 0,
            hand_no: 0,
            actions: Vec::new(),
            finished: Vec::new(),
            halted: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for scripted setups. The controller assumes it
    /// is the only writer between calls.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Hands completed since the last call, oldest first.
    pub fn take_finished_hands(&mut self) -> Vec<HandRecord> {
        std::mem::take(&mut self.finished)
    }

    /// Feeds one decoded action from `seat` and returns the packets to send.
    pub fn handle(&mut self, seat: usize, action: ClientAction) -> Result<Vec<Outbound>, TableError> {
        if self.halted {
            return Err(TableError::Halted);
        }
        let mut out = Vec::new();
        if seat >= self.state.seats.len() {
            out.push(Outbound::new(seat, ServerPacket::Nack));
            return Ok(out);
        }
        match action {
            ClientAction::Leave => self.mark_left(seat, &mut out),
            ClientAction::Join => {
                if self.state.stage == Stage::Join && self.expects_reply(seat) {
                    self.pending[seat] = false;
                    self.maybe_start(&mut out);
                } else {
                    out.push(Outbound::new(seat, ServerPacket::Nack));
                }
            }
            ClientAction::Ready => {
                if self.state.stage == Stage::Init && self.expects_reply(seat) {
                    self.pending[seat] = false;
                    self.maybe_start(&mut out);
                } else {
                    out.push(Outbound::new(seat, ServerPacket::Nack));
                }
            }
            bet_action => self.handle_bet_action(seat, bet_action, &mut out),
        }
        Ok(out)
    }

    /// Transport-level departure: lost connection or turn timeout. Same
    /// treatment as an explicit LEAVE — the seat is out for good, never
    /// folded on its behalf.
    pub fn seat_left(&mut self, seat: usize) -> Vec<Outbound> {
        let mut out = Vec::new();
        if !self.halted && seat < self.state.seats.len() {
            self.mark_left(seat, &mut out);
        }
        out
    }

    fn expects_reply(&self, seat: usize) -> bool {
        self.pending[seat] && self.state.seats[seat].status != SeatStatus::Left
    }

    fn handle_bet_action(&mut self, seat: usize, action: ClientAction, out: &mut Vec<Outbound>) {
        if !self.state.stage.is_betting() {
            out.push(Outbound::new(seat, ServerPacket::Nack));
            return;
        }
        match rules::apply_action(&mut self.state, seat, &action) {
            Ok(()) => {
                self.rejects = 0;
                self.state.seats[seat].acted = true;
                self.actions.push(ActionRecord {
                    seat,
                    stage: self.state.stage,
                    action,
                });
                out.push(Outbound::new(seat, ServerPacket::Ack));
                self.after_accept(out);
            }
            Err(_) => {
                out.push(Outbound::new(seat, ServerPacket::Nack));
                // Only the seat to act burns retries; an out-of-turn seat
                // gets its NACK and nothing else.
                if seat != self.state.current_seat {
                    return;
                }
                self.rejects += 1;
                if let Some(limit) = self.reject_limit {
                    if self.rejects >= limit {
                        self.mark_left(seat, out);
                        return;
                    }
                }
                out.push(self.info_for(self.state.current_seat));
            }
        }
    }

    fn after_accept(&mut self, out: &mut Vec<Outbound>) {
        if self.state.active_count() <= 1 {
            self.showdown(out);
            return;
        }
        if self.state.betting_closed() {
            self.advance_stage(out);
            return;
        }
        if let Some(next) = self.state.next_active_after(self.state.current_seat) {
            self.state.current_seat = next;
            self.rejects = 0;
            out.push(self.info_for(next));
        }
    }

    /// Betting closed: reveal the next street or resolve the hand.
    fn advance_stage(&mut self, out: &mut Vec<Outbound>) {
        match self.state.stage {
            Stage::Preflop => {
                self.reveal(3);
                self.state.stage = Stage::Flop;
            }
            Stage::Flop => {
                self.reveal(1);
                self.state.stage = Stage::Turn;
            }
            Stage::Turn => {
                self.reveal(1);
                self.state.stage = Stage::River;
            }
            Stage::River => {
                self.showdown(out);
                return;
            }
            _ => return,
        }
        self.state.open_street();
        if let Some(first) = self.state.next_active_after(self.state.dealer) {
            self.state.current_seat = first;
            self.rejects = 0;
            out.push(self.info_for(first));
        }
    }

    fn reveal(&mut self, n: usize) {
        for _ in 0..n {
            if let Some(card) = self.state.deck.deal_card() {
                if let Some(slot) = self.state.community.iter_mut().find(|c| c.is_none()) {
                    *slot = Some(card);
                }
            }
        }
    }

    /// Resolves the hand: pick the winner, pay the whole pot into their
    /// stack, disclose the result, then poll every remaining seat for the
    /// next hand.
    fn showdown(&mut self, out: &mut Vec<Outbound>) {
        self.state.stage = Stage::Showdown;
        let winner = self.find_winner();
        let won = self.state.pot;
        if let Some(w) = winner {
            self.state.seats[w].stack += won;
        }
        self.state.pot = 0;

        self.finished.push(HandRecord {
            hand_id: String::new(), // assigned by the logger on write
            seed: self.seed,
            actions: std::mem::take(&mut self.actions),
            board: self.state.revealed_community(),
            winner,
            pot: won,
            ts: None,
        });

        let end = self.end_view(winner, won);
        for seat in 0..self.state.seats.len() {
            if self.state.seats[seat].status != SeatStatus::Left {
                out.push(Outbound::new(seat, ServerPacket::End(end.clone())));
            }
        }

        // Per-hand recovery: folds expire, commitments clear.
        for seat in &mut self.state.seats {
            if seat.status == SeatStatus::Folded {
                seat.status = SeatStatus::Active;
            }
            seat.bet = 0;
            seat.acted = false;
        }
        self.state.highest_bet = 0;
        self.state.stage = Stage::Init;

        if self.state.active_count() < 2 {
            self.halt(out);
            return;
        }
        for (seat, pending) in self.pending.iter_mut().enumerate() {
            *pending = self.state.seats[seat].status != SeatStatus::Left;
        }
    }

    /// First seat holding the maximal strength wins the whole pot; exact
    /// ties are not split. Folded-out hands skip evaluation entirely.
    fn find_winner(&self) -> Option<usize> {
        if let Some(only) = self.state.last_active() {
            return Some(only);
        }
        let board = self.state.revealed_community();
        let mut best: Option<(usize, HandStrength)> = None;
        for (i, seat) in self.state.seats.iter().enumerate() {
            if seat.status != SeatStatus::Active {
                continue;
            }
            let mut cards: Vec<Card> = board.clone();
            cards.extend(seat.hole.iter().flatten().copied());
            if cards.len() < 5 {
                continue;
            }
            let strength = evaluate_hand(&cards);
            if best.map_or(true, |(_, b)| strength > b) {
                best = Some((i, strength));
            }
        }
        best.map(|(i, _)| i)
    }

    fn maybe_start(&mut self, out: &mut Vec<Outbound>) {
        if self.pending.iter().any(|&p| p) {
            return;
        }
        self.begin_hand(out);
    }

    /// INIT: rotate the dealer, reset per-hand state, shuffle, deal, and
    /// open preflop betting. Halts if fewer than two seats can play.
    fn begin_hand(&mut self, out: &mut Vec<Outbound>) {
        let n = self.state.seats.len();
        self.state.dealer = (self.state.dealer + 1) % n;
        if self.state.active_count() < 2 {
            self.halt(out);
            return;
        }

        self.state.pot = 0;
        self.state.highest_bet = 0;
        self.state.community = Default::default();
        for seat in &mut self.state.seats {
            seat.bet = 0;
            seat.acted = false;
            seat.hole = [None, None];
        }
        self.state.deck.shuffle();
        self.hand_no += 1;
        self.actions.clear();

        for i in 0..n {
            if self.state.seats[i].status == SeatStatus::Active {
                let hole = [self.state.deck.deal_card(), self.state.deck.deal_card()];
                self.state.seats[i].hole = hole;
            }
        }

        self.state.stage = Stage::Preflop;
        if let Some(first) = self.state.next_active_after(self.state.dealer) {
            self.state.current_seat = first;
            self.rejects = 0;
            out.push(self.info_for(first));
        }
    }

    fn mark_left(&mut self, seat: usize, out: &mut Vec<Outbound>) {
        if self.state.seats[seat].status == SeatStatus::Left {
            return;
        }
        self.state.seats[seat].status = SeatStatus::Left;
        match self.state.stage {
            Stage::Join | Stage::Init => {
                self.pending[seat] = false;
                self.maybe_start(out);
            }
            stage if stage.is_betting() => {
                if self.state.active_count() <= 1 {
                    self.showdown(out);
                    return;
                }
                let was_current = seat == self.state.current_seat;
                if was_current {
                    if let Some(next) = self.state.next_active_after(seat) {
                        self.state.current_seat = next;
                        self.rejects = 0;
                    }
                }
                // The departed seat may have been the last one holding the
                // street open.
                if self.state.betting_closed() {
                    self.advance_stage(out);
                } else if was_current {
                    out.push(self.info_for(self.state.current_seat));
                }
            }
            _ => {}
        }
    }

    fn halt(&mut self, out: &mut Vec<Outbound>) {
        for seat in 0..self.state.seats.len() {
            if self.state.seats[seat].status != SeatStatus::Left {
                out.push(Outbound::new(seat, ServerPacket::Halt));
            }
        }
        self.halted = true;
    }

    fn info_for(&self, seat: usize) -> Outbound {
        let view = InfoView {
            hole: self.state.seats[seat].hole,
            community: self.state.community,
            seats: self
                .state
                .seats
                .iter()
                .map(|s| SeatView {
                    stack: s.stack,
                    bet: s.bet,
                    status: s.status,
                })
                .collect(),
            pot: self.state.pot,
            dealer: self.state.dealer,
            to_act: self.state.current_seat,
            highest_bet: self.state.highest_bet,
        };
        Outbound::new(seat, ServerPacket::Info(view))
    }

    fn end_view(&self, winner: Option<usize>, won: u32) -> EndView {
        EndView {
            seats: self
                .state
                .seats
                .iter()
                .map(|s| SeatResult {
                    hole: s.hole,
                    stack: s.stack,
                    status: s.status,
                })
                .collect(),
            community: self.state.community,
            pot: won,
            dealer: self.state.dealer,
            winner,
        }
    }
}
