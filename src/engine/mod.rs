// src/engine/mod.rs

//! Orchestration engine for hookshell.
//!
//! Everything that touches the supervisor's state funnels through one
//! `mpsc` channel of [`RuntimeEvent`]s, consumed by the single loop in
//! [`runtime`]:
//! - hook firings from the event source
//! - exit / error notifications from per-process watcher tasks
//! - the event source closing
//! - shutdown signals
//!
//! Watcher tasks run concurrently with the OS processes they wait on, but
//! they only ever *send* events; registry mutation stays on the loop.

use crate::command::{EventParams, ProcessKey};
use crate::supervisor::{ExitReport, ProcessId};

/// Runtime options for the event loop.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeOptions {
    /// If true, exit once the event source has closed and no process is
    /// registered. If false, keep running until shutdown is requested.
    pub exit_when_idle: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            exit_when_idle: true,
        }
    }
}

/// Events flowing into the runtime from the event source and watchers.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// A hook fired with the given parameters.
    HookFired { hook: String, params: EventParams },
    /// A supervised process exited.
    ProcessExited {
        id: ProcessId,
        key: ProcessKey,
        report: ExitReport,
    },
    /// Waiting on a supervised process failed.
    ProcessErrored {
        id: ProcessId,
        key: ProcessKey,
        error: String,
    },
    /// The event source will not fire any more hooks.
    SourceClosed,
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod runtime;

pub use runtime::Runtime;
