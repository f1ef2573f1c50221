//! Tracing setup for the showbook CLI
//!
//! Usage:
//!   showbook --debug serve               # Debug logging to console
//!   showbook --log-file showbook.log ... # Also keep INFO+ in a file
//!   RUST_LOG=showbook_server=debug showbook serve
//!
//! Environment variables:
//!   RUST_LOG                             # Log filter (default: info)

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level if RUST_LOG is not set)
    pub debug: bool,
    /// Append log lines without ANSI colors to this file
    pub log_file: Option<PathBuf>,
}

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize console logging and the optional log file.
pub fn init(config: &TracingConfig) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .compact();

    let file = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::INFO),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(config.debug))
        .with(console)
        .with(file)
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unopenable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = TracingConfig {
            debug: false,
            log_file: Some(dir.path().join("missing").join("showbook.log")),
        };
        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
