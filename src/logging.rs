// src/logging.rs

//! Tracing subscriber for the `hookshell` binary.
//!
//! Log lines go to stderr; launched commands keep stdout to themselves.
//! The filter comes from `--log-level` if given, else from the
//! [`LOG_ENV`] variable, which accepts full `EnvFilter` directives such as
//! `hookshell::supervisor=debug`, else `info`.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HOOKSHELL_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

/// Pick the filter from the CLI level and the raw `HOOKSHELL_LOG` value.
///
/// A CLI level wins. A blank variable counts as unset; an unparsable one is
/// an error rather than a silent fallback.
pub fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return Ok(EnvFilter::new(level.as_directive()));
    }

    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {LOG_ENV} value {directives:?}")),
        None => Ok(EnvFilter::new(LogLevel::Info.as_directive())),
    }
}
