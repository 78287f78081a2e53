use std::path::PathBuf;
use std::process::ExitCode;

use holdem_server::{logging, ServerConfig};

const USAGE: &str = "\
Usage: holdem-server [OPTIONS]

Options:
  --host <ADDR>          Bind address (default 127.0.0.1)
  --port <PORT>          Base port; seat N listens on PORT+N (default 2201)
  --seats <N>            Number of seats (default 6)
  --stack <CHIPS>        Starting stack per seat (default 100)
  --seed <SEED>          Deck seed; omit for a wall-clock seed
  --timeout-ms <MS>      Per-turn timeout; omit to wait forever
  --reject-limit <N>     Invalid actions before a seat is removed; omit for unlimited
  --history <PATH>       Append hand records to this JSONL file
  --help                 Show this message";

fn parse_args(args: &[String]) -> Result<Option<ServerConfig>, String> {
    let mut config = ServerConfig::default();
    let mut it = args.iter();
    while let Some(flag) = it.next() {
        if flag == "--help" || flag == "-h" {
            return Ok(None);
        }
        let value = it
            .next()
            .ok_or_else(|| format!("{flag} requires a value"))?;
        let bad = |_| format!("invalid value for {flag}: {value}");
        match flag.as_str() {
            "--host" => {
                config = config.with_host(value.clone());
            }
            "--port" => {
                config = config.with_base_port(value.parse().map_err(bad)?);
            }
            "--seats" => {
                config = config.with_seats(value.parse().map_err(bad)?);
            }
            "--stack" => {
                config = config.with_starting_stack(value.parse().map_err(bad)?);
            }
            "--seed" => {
                config = config.with_seed(Some(value.parse().map_err(bad)?));
            }
            "--timeout-ms" => {
                config = config.with_turn_timeout_ms(Some(value.parse().map_err(bad)?));
            }
            "--reject-limit" => {
                config = config.with_reject_limit(Some(value.parse().map_err(bad)?));
            }
            "--history" => {
                config = config.with_history_path(Some(PathBuf::from(value)));
            }
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(Some(config))
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match holdem_server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
