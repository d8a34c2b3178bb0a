// src/logging.rs
//! Log output setup for the command-line front end

use crate::error::{NavError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_level` when it is set.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| NavError::Config(format!("Invalid log level '{}': {}", default_level, e)))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| NavError::Config(format!("Failed to install log subscriber: {}", e)))
}
