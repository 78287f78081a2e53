//! Deal command handler for single hand dealing and display.

use std::io::Write;

use holdem_engine::deck::Deck;

use crate::error::CliError;
use crate::formatters::{format_board, format_card};

/// Deals hole cards to `seats` players plus a full five-card board, the
/// same draw order the table uses, and prints everything face up.
pub fn handle_deal_command(
    seed: Option<u64>,
    seats: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if seats < 2 || seats > 22 {
        return Err(CliError::InvalidInput(format!(
            "seats must be between 2 and 22, got {seats}"
        )));
    }
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();

    writeln!(out, "Seed: {}", base_seed)?;
    for seat in 0..seats {
        let c1 = draw(&mut deck)?;
        let c2 = draw(&mut deck)?;
        writeln!(
            out,
            "Seat {}: {} {}",
            seat,
            format_card(c1),
            format_card(c2)
        )?;
    }
    let mut board = Vec::with_capacity(5);
    for _ in 0..5 {
        board.push(draw(&mut deck)?);
    }
    writeln!(out, "Board: {}", format_board(&board))?;
    Ok(())
}

fn draw(deck: &mut Deck) -> Result<holdem_engine::cards::Card, CliError> {
    deck.deal_card()
        .ok_or_else(|| CliError::Engine("deck exhausted".into()))
}
