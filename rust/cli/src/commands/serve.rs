//! Serve command handler: run a table server in the foreground.

use std::io::Write;
use std::path::PathBuf;

use holdem_server::{logging, ServerConfig};

use crate::config;
use crate::error::CliError;

/// Command-line overrides for the `serve` subcommand. `None` means the
/// value from the config file (or the default) stands.
#[derive(Debug, Default)]
pub struct ServeArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub seats: Option<usize>,
    pub stack: Option<u32>,
    pub seed: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub reject_limit: Option<u32>,
    pub history: Option<PathBuf>,
}

/// Resolves configuration (defaults < file/env < flags), then blocks on the
/// server until the table halts.
pub fn handle_serve_command(args: ServeArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = resolve(args)?;

    writeln!(
        out,
        "Serving {} seats on {}:{}..{}",
        cfg.seats(),
        cfg.host(),
        cfg.base_port(),
        cfg.base_port() + cfg.seats() as u16 - 1
    )?;

    logging::init_logging();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(holdem_server::run(cfg))
        .map_err(|e| CliError::Engine(e.to_string()))?;
    writeln!(out, "Table finished")?;
    Ok(())
}

fn resolve(args: ServeArgs) -> Result<ServerConfig, CliError> {
    let mut cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    if let Some(v) = args.host {
        cfg = cfg.with_host(v);
    }
    if let Some(v) = args.port {
        cfg = cfg.with_base_port(v);
    }
    if let Some(v) = args.seats {
        cfg = cfg.with_seats(v);
    }
    if let Some(v) = args.stack {
        cfg = cfg.with_starting_stack(v);
    }
    if args.seed.is_some() {
        cfg = cfg.with_seed(args.seed);
    }
    if args.timeout_ms.is_some() {
        cfg = cfg.with_turn_timeout_ms(args.timeout_ms);
    }
    if args.reject_limit.is_some() {
        cfg = cfg.with_reject_limit(args.reject_limit);
    }
    if args.history.is_some() {
        cfg = cfg.with_history_path(args.history);
    }
    config::validate(&cfg).map_err(|e| CliError::Config(e.to_string()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = ServeArgs {
            seats: Some(4),
            stack: Some(500),
            ..ServeArgs::default()
        };
        let cfg = resolve(args).unwrap();
        assert_eq!(cfg.seats(), 4);
        assert_eq!(cfg.starting_stack(), 500);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let args = ServeArgs {
            seats: Some(1),
            ..ServeArgs::default()
        };
        assert!(resolve(args).is_err());
    }
}
