// src/supervisor/mod.rs

//! Keyed process supervision.
//!
//! The [`Supervisor`] keeps at most one live process per [`ProcessKey`]:
//! running a command whose key is already registered sends the termination
//! signal to the old process and replaces the registry entry with the new
//! one. Exit notifications come back through the runtime event loop and are
//! classified by [`outcome`].
//!
//! [`ProcessKey`]: crate::command::ProcessKey

pub mod core;
pub mod outcome;
pub mod registry;

use std::fmt;

pub use self::core::Supervisor;
pub use outcome::{ExitOutcome, ExitReport, ExitSignal};
pub use registry::{ManagedProcess, ProcessRegistry};

/// Identity of one launched process instance.
///
/// Keys are reused across launches; ids never are. Used to tell a stale exit
/// notification apart from one for the currently registered process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub u64);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
