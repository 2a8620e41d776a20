//! `tracing` subscriber setup for the binaries.
//!
//! Filtering follows the `LEDTRIS_LOG` environment variable with the usual
//! `EnvFilter` syntax (`info`, `ledtris_core=debug`, ...).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LEDTRIS_LOG";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr, `default` applying when `LEDTRIS_LOG` is unset.
pub fn init_stderr(default: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or(default))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// Log to an appended file, but only when `LEDTRIS_LOG` is set.
///
/// The interactive host owns the terminal, so nothing may reach stderr.
/// Returns whether logging was enabled.
pub fn init_file(path: &Path) -> Result<bool> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(false);
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter_or("info"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;
    Ok(true)
}
