//! # Worker Configuration
//!
//! Unified configuration for the commit worker.
//!
//! All values have defaults and can be overridden from the environment:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TI_DB_PATH` | `transfers.db` | SQLite database path |
//! | `TI_BATCH_SIZE` | `500` | Max records per commit |
//! | `TI_POLL_INTERVAL_MS` | `0` | Pause between batches |
//! | `TI_INPUT` | `-` | JSON-lines input path (`-` is stdin) |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// Complete worker configuration.
#[derive(Debug, Clone, Default)]
pub struct WorkerConfig {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Batching configuration.
    pub batch: BatchConfig,
    /// Input configuration.
    pub input: InputConfig,
}

impl WorkerConfig {
    /// Load configuration from environment variables on top of defaults.
    ///
    /// Unparseable numeric values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("TI_DB_PATH") {
            config.storage.db_path = PathBuf::from(path);
        }
        if let Some(size) = parse_env("TI_BATCH_SIZE") {
            config.batch.batch_size = size;
        }
        if let Some(ms) = parse_env("TI_POLL_INTERVAL_MS") {
            config.batch.poll_interval_ms = ms;
        }
        if let Ok(path) = env::var("TI_INPUT") {
            config.input.path = path;
        }

        config
    }

    /// Validate configuration before the worker starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.storage.db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable environment value");
            None
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Batch size must be at least one record.
    #[error("Batch size must be greater than zero (TI_BATCH_SIZE)")]
    ZeroBatchSize,

    /// No database path given.
    #[error("Database path is empty (TI_DB_PATH)")]
    EmptyDbPath,
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("transfers.db"),
        }
    }
}

/// Batching configuration.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Maximum records per commit.
    pub batch_size: usize,
    /// Pause between batches in milliseconds (0 = none).
    pub poll_interval_ms: u64,
}

impl BatchConfig {
    /// Pause between batches, if any.
    pub fn poll_interval(&self) -> Option<Duration> {
        (self.poll_interval_ms > 0).then(|| Duration::from_millis(self.poll_interval_ms))
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 500,
            poll_interval_ms: 0,
        }
    }
}

/// Input configuration.
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// JSON-lines file path, or `-` for stdin.
    pub path: String,
}

impl InputConfig {
    /// True when records are read from stdin.
    pub fn is_stdin(&self) -> bool {
        self.path == "-"
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: "-".to_string(),
        }
    }
}
