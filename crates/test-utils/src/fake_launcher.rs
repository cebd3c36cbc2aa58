use std::collections::HashSet;
use std::io;
use std::sync::{Arc, Mutex};

use hookshell::command::{ProcessKey, ResolvedCommand};
use hookshell::exec::{ProcessControl, ProcessLauncher};
use hookshell::supervisor::ProcessId;

/// One call to `launch` that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    pub id: ProcessId,
    pub key: ProcessKey,
    pub command: ResolvedCommand,
}

#[derive(Debug, Default)]
struct Recorded {
    launched: Vec<LaunchRecord>,
    terminated: Vec<ProcessId>,
    spawn_attempts: usize,
}

/// Shared view of what a [`FakeLauncher`] was asked to do.
#[derive(Debug, Clone, Default)]
pub struct LaunchLog(Arc<Mutex<Recorded>>);

impl LaunchLog {
    pub fn launched(&self) -> Vec<LaunchRecord> {
        self.0.lock().unwrap().launched.clone()
    }

    pub fn terminated(&self) -> Vec<ProcessId> {
        self.0.lock().unwrap().terminated.clone()
    }

    /// Launch calls, including ones that failed to spawn.
    pub fn spawn_attempts(&self) -> usize {
        self.0.lock().unwrap().spawn_attempts
    }

    pub fn ids_for(&self, key: &str) -> Vec<ProcessId> {
        self.launched()
            .into_iter()
            .filter(|r| r.key.as_str() == key)
            .map(|r| r.id)
            .collect()
    }
}

/// A launcher that never touches the OS.
///
/// - records every launch and termination request
/// - fails to spawn programs registered with [`FakeLauncher::failing`]
///
/// Exits are not simulated; tests feed them to the supervisor or runtime
/// themselves.
#[derive(Debug, Default)]
pub struct FakeLauncher {
    log: LaunchLog,
    failing: HashSet<String>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    pub fn log(&self) -> LaunchLog {
        self.log.clone()
    }
}

impl ProcessLauncher for FakeLauncher {
    fn launch(
        &mut self,
        id: ProcessId,
        key: &ProcessKey,
        command: &ResolvedCommand,
    ) -> io::Result<Box<dyn ProcessControl>> {
        let mut recorded = self.log.0.lock().unwrap();
        recorded.spawn_attempts += 1;

        if self.failing.contains(&command.program) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("program not found: {}", command.program),
            ));
        }

        recorded.launched.push(LaunchRecord {
            id,
            key: key.clone(),
            command: command.clone(),
        });

        Ok(Box::new(FakeControl {
            id,
            log: self.log.clone(),
        }))
    }
}

#[derive(Debug)]
struct FakeControl {
    id: ProcessId,
    log: LaunchLog,
}

impl ProcessControl for FakeControl {
    fn pid(&self) -> Option<u32> {
        Some(10_000 + self.id.0 as u32)
    }

    fn terminate(&mut self) -> io::Result<()> {
        self.log.0.lock().unwrap().terminated.push(self.id);
        Ok(())
    }
}
