//! Logging bootstrap
//!
//! Diagnostics go to stderr through the `log` facade. Events carry counts and
//! paths only, never the text of a memory.

use crate::error::{CozyError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use std::sync::OnceLock;

/// Environment variable holding a log spec such as `debug` or `cozy=trace`
pub const LOG_ENV_VAR: &str = "COZY_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Pick the log spec: `--verbose` wins, then `COZY_LOG`, then the default.
pub fn resolve_level(verbose: bool, env_spec: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env_spec
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Start the stderr logger. Later calls in the same process are no-ops.
pub fn init_logging(verbose: bool) -> Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let spec = resolve_level(verbose, std::env::var(LOG_ENV_VAR).ok());
    let handle = Logger::try_with_str(&spec)
        .map_err(|e| CozyError::Logging(format!("invalid log spec `{}`: {}", spec, e)))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| CozyError::Logging(format!("failed to start logger: {}", e)))?;

    // Lost race: another thread already installed a logger
    let _ = LOGGER.set(handle);

    debug!(
        "event=logging_init spec={} version={}",
        spec,
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}
