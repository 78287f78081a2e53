//! # holdem-engine: server-authoritative Texas Hold'em core
//!
//! The game engine behind a multi-seat hold'em table: one authoritative
//! [`state::GameState`], rule validation for every player action, a fixed
//! round sequence driven by the [`table::Table`] controller, and a 7-card
//! hand evaluator for showdown.
//!
//! The engine is synchronous and single-writer. It never touches a socket:
//! the transport hands it decoded [`protocol::ClientAction`]s one at a time
//! and delivers the [`protocol::ServerPacket`]s that come back.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with a seeded ChaCha20 RNG
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`state`] - The mutable record of one table
//! - [`rules`] - Betting-action validation and application
//! - [`table`] - The round controller state machine
//! - [`protocol`] - Typed transport contract (actions in, packets out)
//! - [`history`] - JSONL hand records
//! - [`errors`] - Error types for game operations
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible from the table seed:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal_card(), b.deal_card());
//! ```
//!
//! ## Driving a table
//!
//! ```rust
//! use holdem_engine::protocol::ClientAction;
//! use holdem_engine::table::{Table, TableConfig};
//!
//! let mut table = Table::new(&TableConfig {
//!     seats: 2,
//!     starting_stack: 100,
//!     seed: 7,
//!     reject_limit: None,
//! });
//! // Once every seat joins, the first hand is dealt and the seat after the
//! // dealer receives its view of the table.
//! let _ = table.handle(0, ClientAction::Join).unwrap();
//! let out = table.handle(1, ClientAction::Join).unwrap();
//! assert!(!out.is_empty());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod history;
pub mod protocol;
pub mod rules;
pub mod state;
pub mod table;
