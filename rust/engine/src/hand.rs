use std::cmp::Ordering;

use crate::cards::{Card, Suit};

/// Hand category, ordered weakest to strongest. The discriminant is the
/// category band of the encoded strength value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

/// Total-ordered strength of a 5-7 card hand.
///
/// `value()` packs the category and its tiebreak composite into one integer
/// so that plain numeric comparison orders any two hands: the category picks
/// the millions band, the composite breaks ties inside it (for paired shapes
/// the composite is `high_rank * 100 + low_rank`, for runs and flushes the
/// single deciding rank).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    pub tiebreak: u32,
}

impl HandStrength {
    pub fn value(&self) -> u32 {
        self.category as u32 * 1_000_000 + self.tiebreak
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scores the best poker hand among 5 to 7 cards.
///
/// Categories are checked strongest first and the first match wins, so the
/// result is total and deterministic. Ace-low straights (the wheel, high
/// card Five) are recognized, both plain and suited.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    debug_assert!(
        cards.len() >= 5 && cards.len() <= 7,
        "evaluator takes 5-7 cards"
    );

    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut suit_counts = [0u8; 4];
    let mut by_suit_mask = [0u16; 4];
    let mut rank_mask: u16 = 0;
    for &c in cards {
        let r = c.rank as usize;
        rank_counts[r] += 1;
        rank_mask |= 1 << r;
        let s = suit_index(c.suit);
        suit_counts[s] += 1;
        by_suit_mask[s] |= 1 << r;
    }

    let flush_suit = (0..4).find(|&s| suit_counts[s] >= 5);

    if let Some(s) = flush_suit {
        if let Some(high) = straight_high_from_mask(by_suit_mask[s]) {
            return HandStrength {
                category: Category::StraightFlush,
                tiebreak: high,
            };
        }
    }

    if let Some(quad) = highest_with_count(&rank_counts, 4) {
        return HandStrength {
            category: Category::FourOfAKind,
            tiebreak: quad,
        };
    }

    // Trip and pair ranks, highest first. A second trip counts as the pair
    // half of a full house.
    let mut trips: Vec<u32> = Vec::new();
    let mut pairs: Vec<u32> = Vec::new();
    for r in (2..=14u32).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            _ => {}
        }
    }

    if let Some(&trip) = trips.first() {
        let pair = trips.get(1).copied().or_else(|| pairs.first().copied());
        if let Some(pair) = pair {
            return HandStrength {
                category: Category::FullHouse,
                tiebreak: trip * 100 + pair,
            };
        }
    }

    if let Some(s) = flush_suit {
        let high = highest_in_mask(by_suit_mask[s]);
        return HandStrength {
            category: Category::Flush,
            tiebreak: high,
        };
    }

    if let Some(high) = straight_high_from_mask(rank_mask) {
        return HandStrength {
            category: Category::Straight,
            tiebreak: high,
        };
    }

    if let Some(&trip) = trips.first() {
        return HandStrength {
            category: Category::ThreeOfAKind,
            tiebreak: trip,
        };
    }

    if pairs.len() >= 2 {
        return HandStrength {
            category: Category::TwoPair,
            tiebreak: pairs[0] * 100 + pairs[1],
        };
    }

    if let Some(&pair) = pairs.first() {
        return HandStrength {
            category: Category::OnePair,
            tiebreak: pair,
        };
    }

    HandStrength {
        category: Category::HighCard,
        tiebreak: highest_in_mask(rank_mask),
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.cmp(b)
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Highest rank of a run of five consecutive rank bits, if any.
/// An Ace additionally counts as rank 1 so the wheel scores high card Five.
fn straight_high_from_mask(mask: u16) -> Option<u32> {
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    for high in (5..=14u32).rev() {
        let window = 0b11111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}

fn highest_in_mask(mask: u16) -> u32 {
    for r in (2..=14u32).rev() {
        if (mask & (1 << r)) != 0 {
            return r;
        }
    }
    0
}

fn highest_with_count(rank_counts: &[u8; 15], want: u8) -> Option<u32> {
    (2..=14u32).rev().find(|&r| rank_counts[r as usize] == want)
}
