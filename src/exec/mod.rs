// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually starting the commands the
//! supervisor asks for, using `tokio::process::Command`, and reporting their
//! exits back to the runtime via `RuntimeEvent`s.
//!
//! - [`backend`] provides the `ProcessLauncher` / `ProcessControl` traits and
//!   the production `TokioLauncher`; tests replace it with a fake.
//! - [`process_runner`] owns the per-process watcher task.
//! - [`signal`] delivers the termination signal.

pub mod backend;
pub mod process_runner;
pub mod signal;

pub use backend::{ProcessControl, ProcessLauncher, TokioLauncher};
