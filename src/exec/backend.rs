// src/exec/backend.rs

//! Pluggable process launcher abstraction.
//!
//! The supervisor talks to a `ProcessLauncher` instead of calling
//! `tokio::process::Command` directly. This makes it easy to swap in a fake
//! launcher in tests while keeping the production implementation here.
//!
//! - `TokioLauncher` is the default implementation used by `hookshell`. It
//!   spawns the OS process and a watcher task that reports the exit back to
//!   the runtime as a `RuntimeEvent`.
//! - Tests can provide their own `ProcessLauncher` that records launches and
//!   terminations without touching the OS.

use std::fmt;
use std::io;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{ChildStderr, Command};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::command::{ProcessKey, ResolvedCommand};
use crate::engine::RuntimeEvent;
use crate::supervisor::ProcessId;
use crate::types::{LaunchOptions, StdioMode};

use super::process_runner::watch_process;

/// Creates OS processes for the supervisor.
pub trait ProcessLauncher: Send {
    /// Start `command`. An `Err` means the process could not be created at
    /// all; once `Ok` is returned, the exit is reported asynchronously with
    /// the same `id` and `key`.
    fn launch(
        &mut self,
        id: ProcessId,
        key: &ProcessKey,
        command: &ResolvedCommand,
    ) -> io::Result<Box<dyn ProcessControl>>;
}

/// Control half of a launched process, owned by its registry entry.
pub trait ProcessControl: Send + fmt::Debug {
    fn pid(&self) -> Option<u32>;

    /// Send the termination signal without waiting for the process to exit.
    fn terminate(&mut self) -> io::Result<()>;
}

/// Real launcher used in production.
pub struct TokioLauncher {
    events: mpsc::Sender<RuntimeEvent>,
    options: LaunchOptions,
}

impl TokioLauncher {
    /// Create a launcher whose exit notifications go to `events`.
    pub fn new(events: mpsc::Sender<RuntimeEvent>, options: LaunchOptions) -> Self {
        Self { events, options }
    }

    fn build_command(&self, key: &ProcessKey, command: &ResolvedCommand) -> Command {
        let mut cmd = if !self.options.shell {
            let mut c = Command::new(&command.program);
            c.args(&command.args);
            c
        } else if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(key.as_str());
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(key.as_str());
            c
        };

        cmd.stdin(Stdio::null()).stdout(Stdio::inherit());
        match self.options.stdio {
            StdioMode::Inherit => cmd.stderr(Stdio::inherit()),
            StdioMode::CaptureStderr => cmd.stderr(Stdio::piped()),
        };
        cmd.kill_on_drop(true);
        cmd
    }
}

impl fmt::Debug for TokioLauncher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioLauncher")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ProcessLauncher for TokioLauncher {
    fn launch(
        &mut self,
        id: ProcessId,
        key: &ProcessKey,
        command: &ResolvedCommand,
    ) -> io::Result<Box<dyn ProcessControl>> {
        let mut child = self.build_command(key, command).spawn()?;
        let pid = child.id();
        debug!(key = %key, id = %id, ?pid, "process spawned");

        if let Some(stderr) = child.stderr.take() {
            forward_stderr(key.clone(), id, stderr);
        }

        let (terminate_tx, terminate_rx) = oneshot::channel::<()>();
        tokio::spawn(watch_process(
            id,
            key.clone(),
            child,
            terminate_rx,
            self.events.clone(),
        ));

        Ok(Box::new(TokioProcessControl {
            pid,
            terminate: Some(terminate_tx),
        }))
    }
}

/// Handle to a process owned by a watcher task.
///
/// The watcher owns the `Child`; termination requests travel over a oneshot
/// so the signal is only ever sent to a process that has not been reaped.
#[derive(Debug)]
struct TokioProcessControl {
    pid: Option<u32>,
    terminate: Option<oneshot::Sender<()>>,
}

impl ProcessControl for TokioProcessControl {
    fn pid(&self) -> Option<u32> {
        self.pid
    }

    fn terminate(&mut self) -> io::Result<()> {
        if let Some(tx) = self.terminate.take() {
            if tx.send(()).is_err() {
                debug!(pid = ?self.pid, "process already exited before termination request");
            }
        }
        Ok(())
    }
}

/// Consume captured stderr so the pipe never fills, surfacing each line in
/// the log.
fn forward_stderr(key: ProcessKey, id: ProcessId, stderr: ChildStderr) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            warn!(key = %key, id = %id, "stderr: {line}");
        }
    });
}
