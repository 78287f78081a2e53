//! Layered configuration for the `serve` subcommand.
//!
//! Defaults, then an optional TOML file named by `HOLDEM_CONFIG`, then the
//! `HOLDEM_SEED` environment variable. Command-line flags are applied on
//! top by the caller and win over everything here.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use holdem_server::ServerConfig;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io: {}", e),
            ConfigError::Parse(e) => write!(f, "parse: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    base_port: Option<u16>,
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    turn_timeout_ms: Option<u64>,
    #[serde(default)]
    reject_limit: Option<u32>,
    #[serde(default)]
    history: Option<PathBuf>,
}

/// Builds the server configuration from defaults, the optional config file
/// and the environment.
pub fn load() -> Result<ServerConfig, ConfigError> {
    let file = match std::env::var("HOLDEM_CONFIG") {
        Ok(path) => {
            let s = fs::read_to_string(path)?;
            toml::from_str(&s)?
        }
        Err(_) => FileConfig::default(),
    };

    let mut cfg = ServerConfig::default();
    if let Some(v) = file.host {
        cfg = cfg.with_host(v);
    }
    if let Some(v) = file.base_port {
        cfg = cfg.with_base_port(v);
    }
    if let Some(v) = file.seats {
        cfg = cfg.with_seats(v);
    }
    if let Some(v) = file.starting_stack {
        cfg = cfg.with_starting_stack(v);
    }
    if file.seed.is_some() {
        cfg = cfg.with_seed(file.seed);
    }
    if file.turn_timeout_ms.is_some() {
        cfg = cfg.with_turn_timeout_ms(file.turn_timeout_ms);
    }
    if file.reject_limit.is_some() {
        cfg = cfg.with_reject_limit(file.reject_limit);
    }
    if file.history.is_some() {
        cfg = cfg.with_history_path(file.history);
    }

    if let Ok(seed) = std::env::var("HOLDEM_SEED") {
        if !seed.is_empty() {
            cfg = cfg.with_seed(Some(
                seed.parse()
                    .map_err(|_| ConfigError::Invalid("Invalid HOLDEM_SEED".into()))?,
            ));
        }
    }

    validate(&cfg)?;
    Ok(cfg)
}

pub fn validate(cfg: &ServerConfig) -> Result<(), ConfigError> {
    if cfg.seats() < 2 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: seats must be >=2".into(),
        ));
    }
    // 22 seats exhausts a 52-card deck with a full board.
    if cfg.seats() > 22 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: seats must be <=22".into(),
        ));
    }
    if cfg.starting_stack() == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_single_seat() {
        let cfg = ServerConfig::default().with_seats(1);
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn rejects_zero_stack() {
        let cfg = ServerConfig::default().with_starting_stack(0);
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn accepts_defaults() {
        assert!(validate(&ServerConfig::default()).is_ok());
    }
}
