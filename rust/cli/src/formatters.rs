//! Card and board formatters for terminal display.
//!
//! Pure functions for rendering cards with Unicode suit symbols and an
//! ASCII fallback for terminals that can't display them, plus the inverse
//! parser used by the `eval` subcommand.

use holdem_engine::cards::{Card, Rank, Suit};

use crate::error::CliError;

/// Whether the terminal can display Unicode suit symbols. On Windows this
/// checks for a modern terminal; elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.to_string()
    }
}

pub fn format_card(card: Card) -> String {
    format!("{}{}", card.rank, format_suit(card.suit))
}

/// Renders a board as `[As Kd Qh]`, empty slots omitted.
pub fn format_board(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(|&c| format_card(c)).collect();
    format!("[{}]", inner.join(" "))
}

/// Parses a two-character card like `As`, `Td` or `9h`. Rank is case
/// sensitive upper, suit lower, matching the display form.
pub fn parse_card(s: &str) -> Result<Card, CliError> {
    let mut chars = s.chars();
    let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CliError::InvalidInput(format!(
            "bad card '{s}': expected rank and suit, e.g. As"
        )));
    };
    let rank = match r {
        '2' => Rank::Two,
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        other => {
            return Err(CliError::InvalidInput(format!(
                "bad rank '{other}' in card '{s}'"
            )))
        }
    };
    let suit = match su {
        'c' => Suit::Clubs,
        'd' => Suit::Diamonds,
        'h' => Suit::Hearts,
        's' => Suit::Spades,
        other => {
            return Err(CliError::InvalidInput(format!(
                "bad suit '{other}' in card '{s}'"
            )))
        }
    };
    Ok(Card::new(rank, suit))
}
