// src/command/mod.rs

//! Command specifications and their resolution into concrete processes.
//!
//! - [`spec`] defines the three shapes a user can describe a command in.
//! - [`resolve`] turns a spec plus the firing hook's parameters into a
//!   [`ResolvedCommand`] (program + arguments) and derives its [`ProcessKey`].
//! - [`template`] backs the config-file form of parameter-derived commands.
//!
//! Nothing in here performs IO.

pub mod resolve;
pub mod spec;
pub mod template;

pub use resolve::{resolve, ProcessKey, ResolutionFailure, ResolvedCommand};
pub use spec::{CommandSpec, DeriveFn, EventParams, StaticSpec};
pub use template::Template;
