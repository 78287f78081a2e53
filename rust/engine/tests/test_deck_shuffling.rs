use std::collections::HashSet;

use holdem_engine::cards::full_deck;
use holdem_engine::deck::Deck;

fn drain(deck: &mut Deck) -> Vec<holdem_engine::cards::Card> {
    std::iter::from_fn(|| deck.deal_card()).collect()
}

#[test]
fn unshuffled_deck_is_canonical_order() {
    let mut deck = Deck::new_with_seed(99);
    assert_eq!(drain(&mut deck), full_deck());
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new_with_seed(42);
    let mut b = Deck::new_with_seed(42);
    a.shuffle();
    b.shuffle();
    assert_eq!(drain(&mut a), drain(&mut b));
}

#[test]
fn different_seeds_differ() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    a.shuffle();
    b.shuffle();
    assert_ne!(drain(&mut a), drain(&mut b));
}

#[test]
fn shuffle_keeps_all_52_cards() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle();
    let cards = drain(&mut deck);
    assert_eq!(cards.len(), 52);
    let unique: HashSet<_> = cards.iter().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn cursor_advances_and_only_shuffle_resets_it() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    assert_eq!(deck.position(), 0);
    assert_eq!(deck.remaining(), 52);

    deck.deal_card().unwrap();
    deck.deal_card().unwrap();
    assert_eq!(deck.position(), 2);
    assert_eq!(deck.remaining(), 50);

    deck.shuffle();
    assert_eq!(deck.position(), 0);
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn exhausted_deck_returns_none() {
    let mut deck = Deck::new_with_seed(11);
    deck.shuffle();
    for _ in 0..52 {
        assert!(deck.deal_card().is_some());
    }
    assert!(deck.deal_card().is_none());
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn successive_shuffles_produce_different_permutations() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let first = drain(&mut deck);
    deck.shuffle();
    let second = drain(&mut deck);
    assert_ne!(first, second);
}
