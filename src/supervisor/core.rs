// src/supervisor/core.rs

use std::collections::HashSet;

use tracing::{debug, info};

use crate::command::{resolve, CommandSpec, ProcessKey};
use crate::errors::{ErrorPolicy, HookshellError, Result};
use crate::exec::ProcessLauncher;

use super::outcome::{ExitOutcome, ExitReport};
use super::registry::{ManagedProcess, ProcessRegistry};
use super::ProcessId;

/// Runs commands with at most one live process per key.
///
/// The supervisor owns the registry and the launcher. It is driven from a
/// single control flow (the runtime loop), so none of its state is locked.
/// Every method returning `Result` only errors when the [`ErrorPolicy`]
/// says the error is fatal.
#[derive(Debug)]
pub struct Supervisor<L: ProcessLauncher> {
    registry: ProcessRegistry,
    launcher: L,
    policy: ErrorPolicy,
    next_id: u64,
    /// Processes pushed out of their slot by a newer launch that have not
    /// reported their exit yet.
    replaced: HashSet<ProcessId>,
}

impl<L: ProcessLauncher> Supervisor<L> {
    pub fn new(launcher: L, policy: ErrorPolicy) -> Self {
        Self {
            registry: ProcessRegistry::new(),
            launcher,
            policy,
            next_id: 1,
            replaced: HashSet::new(),
        }
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    /// True when no launched process is still waiting to report its exit,
    /// registered or replaced.
    pub fn is_idle(&self) -> bool {
        self.registry.is_empty() && self.replaced.is_empty()
    }

    /// Number of replaced processes whose exit has not arrived yet.
    pub fn replaced_count(&self) -> usize {
        self.replaced.len()
    }

    /// Run `spec` for a hook fired with `params`.
    ///
    /// Any live process already registered under the resolved key is sent
    /// the termination signal first; the new process takes over the slot
    /// immediately, even while the old one is still shutting down.
    pub fn handle(&mut self, spec: &CommandSpec, params: &[String]) -> Result<()> {
        let command = match resolve(spec, params) {
            Ok(c) => c,
            Err(failure) => return self.policy.report(failure.into()),
        };
        let key = command.key();

        info!("Running script: {key}");

        if let Some(existing) = self.registry.get_mut(&key) {
            if existing.is_live() {
                debug!(
                    key = %key,
                    id = %existing.id(),
                    pid = ?existing.pid(),
                    "terminating previous instance"
                );
                existing.terminate();
            }
        }

        let id = self.allocate_id();
        match self.launcher.launch(id, &key, &command) {
            Ok(control) => {
                debug!(key = %key, id = %id, pid = ?control.pid(), "registered process");
                let previous = self
                    .registry
                    .set(key.clone(), ManagedProcess::new(id, key, control));
                if let Some(previous) = previous {
                    self.replaced.insert(previous.id());
                }
                Ok(())
            }
            Err(source) => self.policy.report(HookshellError::Spawn { key, source }),
        }
    }

    /// React to the exit of process `id`.
    ///
    /// The registry slot is cleared only if `id` still owns it.
    pub fn on_exit(&mut self, id: ProcessId, key: &ProcessKey, report: ExitReport) -> Result<ExitOutcome> {
        self.forget(key, id);

        let outcome = report.classify();
        match outcome {
            ExitOutcome::Killed => info!("Killing script: {key}"),
            ExitOutcome::Completed => info!("Completed script: {key}"),
            ExitOutcome::Acknowledged(signal) => {
                debug!(key = %key, id = %id, signal, "process ended by signal");
            }
            ExitOutcome::Failed(code) => {
                self.policy.report(HookshellError::ProcessFailed {
                    key: key.clone(),
                    reason: format!("exited with code {code}"),
                })?;
            }
        }
        Ok(outcome)
    }

    /// React to a failure while waiting on process `id`.
    pub fn on_error(&mut self, id: ProcessId, key: &ProcessKey, error: String) -> Result<()> {
        self.forget(key, id);
        self.policy.report(HookshellError::ProcessFailed {
            key: key.clone(),
            reason: error,
        })
    }

    /// Send the termination signal to every registered process.
    pub fn terminate_all(&mut self) {
        if !self.registry.is_empty() {
            info!(count = self.registry.len(), "terminating running scripts");
        }
        self.registry.terminate_all();
    }

    fn forget(&mut self, key: &ProcessKey, id: ProcessId) {
        if !self.registry.clear_if_current(key, id) {
            self.replaced.remove(&id);
        }
    }

    fn allocate_id(&mut self) -> ProcessId {
        let id = ProcessId(self.next_id);
        self.next_id += 1;
        id
    }
}
