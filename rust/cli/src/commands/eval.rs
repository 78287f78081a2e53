//! Eval command handler: score a hand given on the command line.

use std::io::Write;

use holdem_engine::hand::{evaluate_hand, Category};

use crate::error::CliError;
use crate::formatters::parse_card;

/// Parses 5-7 cards and prints the best five-card hand's category and
/// comparable strength value.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    if cards.len() < 5 || cards.len() > 7 {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut parsed = Vec::with_capacity(cards.len());
    for s in cards {
        let card = parse_card(s)?;
        if parsed.contains(&card) {
            return Err(CliError::InvalidInput(format!("duplicate card '{s}'")));
        }
        parsed.push(card);
    }

    let strength = evaluate_hand(&parsed);
    writeln!(out, "Category: {}", category_name(strength.category))?;
    writeln!(out, "Strength: {}", strength.value())?;
    Ok(())
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::HighCard => "High card",
        Category::OnePair => "One pair",
        Category::TwoPair => "Two pair",
        Category::ThreeOfAKind => "Three of a kind",
        Category::Straight => "Straight",
        Category::Flush => "Flush",
        Category::FullHouse => "Full house",
        Category::FourOfAKind => "Four of a kind",
        Category::StraightFlush => "Straight flush",
    }
}
