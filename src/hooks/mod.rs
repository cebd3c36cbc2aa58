// src/hooks/mod.rs

//! Named trigger events and their bindings to commands.
//!
//! - [`source`] defines what an event source must offer: a way to check
//!   that a hook exists and to subscribe once to it.
//! - [`table`] is an in-memory event source with a fixed set of hook names.
//! - [`dispatcher`] binds the configured hook → command lists against an
//!   event source and hands each firing to the supervisor.
//! - [`stdin`] drives a [`HookTable`] from a line protocol, which is how the
//!   binary receives hook firings from its host.

pub mod dispatcher;
pub mod source;
pub mod stdin;
pub mod table;

pub use dispatcher::{Dispatcher, TriggerBindings};
pub use source::{EventSource, HookSubscriber};
pub use table::HookTable;

/// Hooks recognised by default: the compiler lifecycle of a typical
/// bundler-style build tool.
pub const DEFAULT_HOOKS: &[&str] = &[
    "environment",
    "afterEnvironment",
    "entryOption",
    "afterPlugins",
    "beforeRun",
    "run",
    "watchRun",
    "beforeCompile",
    "compile",
    "thisCompilation",
    "compilation",
    "make",
    "afterCompile",
    "shouldEmit",
    "emit",
    "afterEmit",
    "assetEmitted",
    "done",
    "failed",
    "invalid",
    "watchClose",
    "infrastructureLog",
];
