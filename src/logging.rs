// src/logging.rs

//! Logging setup for `cmm` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `CMM_LOG` environment variable, as an `EnvFilter` directive string
//!    (e.g. "debug" or "cmm::exec=trace,warn")
//! 3. default to `warn`
//!
//! Logs are sent to STDERR so that stdout carries only what the external
//! tool printed.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "CMM_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = build_filter(cli_level, std::env::var(LOG_ENV_VAR).ok().as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;

    Ok(())
}

/// Resolve the filter from the CLI level and the raw `CMM_LOG` value.
///
/// An unparsable `CMM_LOG` falls back to the default rather than failing.
fn build_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(directive(level));
    }

    env_value
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
