// src/supervisor/registry.rs

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::command::ProcessKey;
use crate::exec::ProcessControl;

use super::ProcessId;

/// The supervisor's handle to one spawned process.
#[derive(Debug)]
pub struct ManagedProcess {
    id: ProcessId,
    key: ProcessKey,
    control: Box<dyn ProcessControl>,
    terminate_requested: bool,
}

impl ManagedProcess {
    pub fn new(id: ProcessId, key: ProcessKey, control: Box<dyn ProcessControl>) -> Self {
        Self {
            id,
            key,
            control,
            terminate_requested: false,
        }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn pid(&self) -> Option<u32> {
        self.control.pid()
    }

    /// False once a termination signal has been requested.
    pub fn is_live(&self) -> bool {
        !self.terminate_requested
    }

    /// Ask the process to terminate. Does not wait for it to exit; the exit
    /// notification arrives later through the runtime.
    pub fn terminate(&mut self) {
        if self.terminate_requested {
            return;
        }
        self.terminate_requested = true;
        if let Err(e) = self.control.terminate() {
            warn!(key = %self.key, id = %self.id, error = %e, "failed to signal process");
        }
    }
}

/// Map from key to the current process for that key.
///
/// Entries are replaced, never appended: at most one process per key.
#[derive(Debug, Default)]
pub struct ProcessRegistry {
    entries: HashMap<ProcessKey, ManagedProcess>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &ProcessKey) -> Option<&ManagedProcess> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &ProcessKey) -> Option<&mut ManagedProcess> {
        self.entries.get_mut(key)
    }

    /// Replace the entry for `key`. The caller must already have asked any
    /// previous live process under this key to terminate.
    pub fn set(&mut self, key: ProcessKey, process: ManagedProcess) -> Option<ManagedProcess> {
        self.entries.insert(key, process)
    }

    pub fn clear(&mut self, key: &ProcessKey) -> Option<ManagedProcess> {
        self.entries.remove(key)
    }

    /// Clear the slot only if it still holds process `id`.
    ///
    /// Returns false when a newer process already took the slot (or it was
    /// empty); that entry is left untouched.
    pub fn clear_if_current(&mut self, key: &ProcessKey, id: ProcessId) -> bool {
        match self.entries.get(key) {
            Some(current) if current.id() == id => self.clear(key).is_some(),
            Some(current) => {
                debug!(
                    key = %key,
                    exited = %id,
                    current = %current.id(),
                    "stale exit notification; slot belongs to a newer process"
                );
                false
            }
            None => false,
        }
    }

    /// Send the termination signal to every registered process.
    pub fn terminate_all(&mut self) {
        for process in self.entries.values_mut() {
            process.terminate();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
