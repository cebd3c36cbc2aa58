// src/command/resolve.rs

use std::fmt;

use thiserror::Error;

use super::spec::{CommandSpec, StaticSpec};

/// A concrete program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ResolvedCommand {
    /// Canonical identity used for deduplication: the program, followed by
    /// the arguments joined with single spaces.
    pub fn key(&self) -> ProcessKey {
        if self.args.is_empty() {
            ProcessKey(self.program.clone())
        } else {
            ProcessKey(format!("{} {}", self.program, self.args.join(" ")))
        }
    }
}

/// Registry key for a resolved command.
///
/// Two specs that resolve to the same program and arguments share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessKey(String);

impl ProcessKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProcessKey {
    fn from(s: &str) -> Self {
        ProcessKey(s.to_string())
    }
}

impl From<String> for ProcessKey {
    fn from(s: String) -> Self {
        ProcessKey(s)
    }
}

/// A spec that could not be turned into a program to run.
#[derive(Error, Debug, Clone)]
#[error("Missing command for script {spec}")]
pub struct ResolutionFailure {
    pub spec: CommandSpec,
}

/// Resolve `spec` against the parameters of the firing hook.
pub fn resolve(spec: &CommandSpec, params: &[String]) -> Result<ResolvedCommand, ResolutionFailure> {
    let resolved = match spec {
        CommandSpec::Literal(line) => split_command_line(line),
        CommandSpec::Structured { program, args } => structured(program, args),
        CommandSpec::Derived(derive) => match derive(params) {
            StaticSpec::Literal(line) => split_command_line(&line),
            StaticSpec::Structured { program, args } => structured(&program, &args),
        },
    };

    resolved.ok_or_else(|| ResolutionFailure { spec: spec.clone() })
}

fn split_command_line(line: &str) -> Option<ResolvedCommand> {
    let mut tokens = line.split_whitespace();
    let program = tokens.next()?;
    Some(ResolvedCommand {
        program: program.to_string(),
        args: tokens.map(str::to_string).collect(),
    })
}

fn structured(program: &str, args: &[String]) -> Option<ResolvedCommand> {
    if program.is_empty() {
        return None;
    }
    Some(ResolvedCommand {
        program: program.to_string(),
        args: args.to_vec(),
    })
}
