// src/errors.rs

//! Crate-wide error type and the watch-mode reporting policy.

use thiserror::Error;
use tracing::error;

use crate::command::{ProcessKey, ResolutionFailure};

#[derive(Error, Debug)]
pub enum HookshellError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A `[hooks]` entry names a hook the event source does not know.
    #[error("The hook {0} does not exist on the event source.")]
    UnknownHook(String),

    /// A command specification produced no usable program.
    #[error(transparent)]
    Resolution(#[from] ResolutionFailure),

    /// The OS refused to create the process (missing binary, permissions...).
    #[error("Error while running `{key}`: {source}")]
    Spawn {
        key: ProcessKey,
        #[source]
        source: std::io::Error,
    },

    /// A running process failed on its own (not killed by us).
    #[error("Error while running `{key}`: {reason}")]
    ProcessFailed { key: ProcessKey, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("runtime event channel closed")]
    ChannelClosed,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HookshellError {
    /// True for errors caused by the user's configuration rather than by a
    /// process at runtime.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            HookshellError::ConfigError(_)
                | HookshellError::UnknownHook(_)
                | HookshellError::Resolution(_)
                | HookshellError::TomlError(_)
        )
    }
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for HookshellError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        HookshellError::ChannelClosed
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, HookshellError>;

/// Decides whether a reported error aborts the host or is only logged.
///
/// In watch mode the host is long-running, so configuration and process
/// errors are written to the error log and execution continues. Otherwise
/// the error is handed back to the caller to propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorPolicy {
    watch: bool,
}

impl ErrorPolicy {
    pub fn new(watch: bool) -> Self {
        Self { watch }
    }

    /// Errors are returned to the caller.
    pub fn fatal() -> Self {
        Self::new(false)
    }

    /// Errors are logged and swallowed.
    pub fn watching() -> Self {
        Self::new(true)
    }

    pub fn is_watch(&self) -> bool {
        self.watch
    }

    /// `Ok(())` when the error was logged, `Err(err)` when it must propagate.
    pub fn report(&self, err: HookshellError) -> Result<()> {
        if self.watch {
            error!("{err}");
            Ok(())
        } else {
            Err(err)
        }
    }
}
