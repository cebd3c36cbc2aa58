// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;
use crate::types::StdioMode;

/// Command-line arguments for `hookshell`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hookshell",
    version,
    about = "Run commands when build lifecycle hooks fire, one live process per command.",
    long_about = "Reads hook firings from stdin, one per line (`hookName [param ...]`), \
                  and runs the commands bound to each hook in the config file. A command \
                  that is still running when its hook fires again is terminated first."
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Hookshell.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Watch mode: log configuration and process errors instead of exiting.
    ///
    /// Overrides `[config].watch = false`.
    #[arg(long)]
    pub watch: bool,

    /// Keep running after stdin closes, until Ctrl-C.
    #[arg(long)]
    pub linger: bool,

    /// Stream handling for launched commands (inherit, capture_stderr).
    #[arg(long, value_name = "MODE")]
    pub stdio: Option<StdioMode>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `HOOKSHELL_LOG` (an `EnvFilter` directive) or `info` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the hook bindings, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
