use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A seeded 52-card deck with a draw cursor.
///
/// The cursor only moves forward between shuffles, so within one hand every
/// card is dealt at most once. `shuffle` restores the full deck, re-permutes
/// it with the deck's own RNG stream, and resets the cursor, which is the
/// only way the cursor ever returns to zero.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds the canonical rank-major order and seeds the shuffle RNG.
    /// The initial order is kept until `shuffle` is called explicitly.
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Draw cursor: index of the next undrawn card.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
