// src/command/spec.rs

use std::fmt;
use std::sync::Arc;

/// Parameters a hook was fired with, forwarded to derived commands.
pub type EventParams = Vec<String>;

/// Function computing a command from hook parameters.
pub type DeriveFn = Arc<dyn Fn(&[String]) -> StaticSpec + Send + Sync>;

/// A command as supplied by the user.
///
/// Immutable once built. `Derived` returns a [`StaticSpec`], so a derived
/// command can never produce another function.
#[derive(Clone)]
pub enum CommandSpec {
    /// A whitespace-separated command line, e.g. `"cat README.md"`.
    Literal(String),
    /// Program and arguments given separately; passed through verbatim.
    Structured { program: String, args: Vec<String> },
    /// Computed from the hook parameters each time the hook fires.
    Derived(DeriveFn),
}

/// The non-function shapes of a command, as returned by [`CommandSpec::Derived`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticSpec {
    Literal(String),
    Structured { program: String, args: Vec<String> },
}

impl CommandSpec {
    pub fn literal(line: impl Into<String>) -> Self {
        CommandSpec::Literal(line.into())
    }

    pub fn structured<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::Structured {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> StaticSpec + Send + Sync + 'static,
    {
        CommandSpec::Derived(Arc::new(f))
    }
}

impl From<StaticSpec> for CommandSpec {
    fn from(spec: StaticSpec) -> Self {
        match spec {
            StaticSpec::Literal(line) => CommandSpec::Literal(line),
            StaticSpec::Structured { program, args } => CommandSpec::Structured { program, args },
        }
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandSpec::Literal(line) => f.debug_tuple("Literal").field(line).finish(),
            CommandSpec::Structured { program, args } => f
                .debug_struct("Structured")
                .field("program", program)
                .field("args", args)
                .finish(),
            CommandSpec::Derived(_) => f.write_str("Derived(<fn>)"),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandSpec::Literal(line) => write!(f, "{line:?}"),
            CommandSpec::Structured { program, args } => {
                write!(f, "{{ command: {program:?}, args: {args:?} }}")
            }
            CommandSpec::Derived(_) => f.write_str("<derived command>"),
        }
    }
}
