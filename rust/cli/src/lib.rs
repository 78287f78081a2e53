//! Command-line interface for the hold'em engine.
//!
//! The primary entry point is [`run`], which parses arguments and executes
//! the matching subcommand:
//!
//! - `serve`: run a table server, one listening port per seat
//! - `deal`: deal a single hand for inspection
//! - `eval`: score a 5-7 card hand given on the command line
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "deal", "--seed", "42"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;

use cli::{Commands, HoldemCli};
use commands::{handle_deal_command, handle_eval_command, handle_serve_command, ServeArgs};
pub use error::CliError;

/// Parses arguments, dispatches the subcommand, and returns the process
/// exit code. All output goes through the injected streams so tests can
/// capture it.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Serve {
            host,
            port,
            seats,
            stack,
            seed,
            timeout_ms,
            reject_limit,
            history,
        } => handle_serve_command(
            ServeArgs {
                host,
                port,
                seats,
                stack,
                seed,
                timeout_ms,
                reject_limit,
                history,
            },
            out,
        ),
        Commands::Deal { seed, seats } => handle_deal_command(seed, seats, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
