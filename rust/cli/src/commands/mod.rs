//! Command handler modules for the holdem CLI.
//!
//! One module per subcommand, each exposing a single
//! `handle_COMMAND_command` function that writes to injected streams and
//! propagates failures as [`crate::error::CliError`].

mod deal;
mod eval;
mod serve;

pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use serve::{handle_serve_command, ServeArgs};
