use std::path::{Path, PathBuf};
use std::time::Duration;

use holdem_engine::table::TableConfig;

/// Transport-side configuration for one table server.
///
/// Each seat gets its own listening port, `base_port + seat`, matching the
/// fixed port-per-player scheme of the original service. Defaults reproduce
/// its reference setup: six seats from port 2201, 100-chip stacks, no turn
/// timeout and unbounded invalid-action retries.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    host: String,
    base_port: u16,
    seats: usize,
    starting_stack: u32,
    seed: Option<u64>,
    turn_timeout_ms: Option<u64>,
    reject_limit: Option<u32>,
    history_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            base_port: 2201,
            seats: 6,
            starting_stack: 100,
            seed: None,
            turn_timeout_ms: None,
            reject_limit: None,
            history_path: None,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, base_port: u16, seats: usize) -> Self {
        Self {
            host: host.into(),
            base_port,
            seats,
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_base_port(mut self, port: u16) -> Self {
        self.base_port = port;
        self
    }

    pub fn with_seats(mut self, seats: usize) -> Self {
        self.seats = seats;
        self
    }

    pub fn with_starting_stack(mut self, stack: u32) -> Self {
        self.starting_stack = stack;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_turn_timeout_ms(mut self, ms: Option<u64>) -> Self {
        self.turn_timeout_ms = ms;
        self
    }

    pub fn with_reject_limit(mut self, limit: Option<u32>) -> Self {
        self.reject_limit = limit;
        self
    }

    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_port(&self) -> u16 {
        self.base_port
    }

    pub fn seats(&self) -> usize {
        self.seats
    }

    pub fn starting_stack(&self) -> u32 {
        self.starting_stack
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn turn_timeout(&self) -> Option<Duration> {
        self.turn_timeout_ms.map(Duration::from_millis)
    }

    pub fn reject_limit(&self) -> Option<u32> {
        self.reject_limit
    }

    pub fn history_path(&self) -> Option<&Path> {
        self.history_path.as_deref()
    }

    /// Engine-side configuration with the seed pinned down.
    pub fn table_config(&self, seed: u64) -> TableConfig {
        TableConfig {
            seats: self.seats,
            starting_stack: self.starting_stack,
            seed,
            reject_limit: self.reject_limit,
        }
    }
}
