//! Clap argument definitions for the `holdem` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "holdem", about = "Texas hold'em table server and tools")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a table server, one listening port per seat
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,
        /// Base port; seat N listens on PORT+N
        #[arg(long)]
        port: Option<u16>,
        /// Number of seats at the table
        #[arg(long)]
        seats: Option<usize>,
        /// Starting stack per seat
        #[arg(long)]
        stack: Option<u32>,
        /// Deck seed; omit for a wall-clock seed
        #[arg(long)]
        seed: Option<u64>,
        /// Per-turn timeout in milliseconds; omit to wait forever
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Invalid actions before a seat is removed; omit for unlimited
        #[arg(long)]
        reject_limit: Option<u32>,
        /// Append hand records to this JSONL file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Deal one hand for inspection
    Deal {
        /// RNG seed for deterministic dealing
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats to deal to
        #[arg(long, default_value_t = 2)]
        seats: usize,
    },
    /// Evaluate a 5-7 card hand given as e.g. `As Kd Qh Jc Ts`
    Eval {
        /// Cards, two characters each (rank then suit)
        #[arg(required = true)]
        cards: Vec<String>,
    },
}
