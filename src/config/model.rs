// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::command::{CommandSpec, Template};
use crate::errors::{HookshellError, Result};
use crate::hooks::{TriggerBindings, DEFAULT_HOOKS};
use crate::types::{LaunchOptions, StdioMode};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// watch = true
/// stdio = "capture_stderr"
///
/// [host]
/// hooks = ["beforeRun", "afterCompile"]
///
/// [hooks]
/// beforeRun = ["cat README.md"]
/// afterCompile = [{ command = "git", args = ["status"] }, { template = "echo {0}" }]
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// What the event source recognises, from `[host]`.
    #[serde(default)]
    pub host: HostSection,

    /// Hook name → ordered commands, from `[hooks]`.
    #[serde(default)]
    pub hooks: BTreeMap<String, Vec<RawCommandSpec>>,
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct ConfigSection {
    /// Watch mode: errors are logged instead of stopping hookshell.
    #[serde(default)]
    pub watch: bool,

    /// `"inherit"` (default) or `"capture_stderr"`.
    #[serde(default)]
    pub stdio: StdioMode,

    /// Run commands through the platform shell.
    #[serde(default)]
    pub shell: bool,
}

impl ConfigSection {
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            stdio: self.stdio,
            shell: self.shell,
        }
    }
}

/// `[host]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct HostSection {
    /// Hook names the event source can fire. Defaults to [`DEFAULT_HOOKS`].
    #[serde(default = "default_host_hooks")]
    pub hooks: Vec<String>,
}

fn default_host_hooks() -> Vec<String> {
    DEFAULT_HOOKS.iter().map(|s| s.to_string()).collect()
}

impl Default for HostSection {
    fn default() -> Self {
        Self {
            hooks: default_host_hooks(),
        }
    }
}

/// One entry of a `[hooks]` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawCommandSpec {
    /// `"cat README.md"`
    Literal(String),
    /// `{ command = "git", args = ["status"] }`
    Structured(StructuredCommand),
    /// `{ template = "echo {0}" }`
    Template(TemplateCommand),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructuredCommand {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateCommand {
    pub template: String,
}

impl RawCommandSpec {
    pub fn to_spec(&self) -> Result<CommandSpec> {
        match self {
            RawCommandSpec::Literal(line) => Ok(CommandSpec::literal(line.clone())),
            RawCommandSpec::Structured(s) => {
                Ok(CommandSpec::structured(s.command.clone(), s.args.clone()))
            }
            RawCommandSpec::Template(t) => Template::parse(&t.template)
                .map(Template::into_spec)
                .map_err(HookshellError::ConfigError),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub host: HostSection,
    pub hooks: BTreeMap<String, Vec<RawCommandSpec>>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        host: HostSection,
        hooks: BTreeMap<String, Vec<RawCommandSpec>>,
    ) -> Self {
        Self { config, host, hooks }
    }

    /// Build the hook → command bindings handed to the dispatcher.
    pub fn trigger_bindings(&self) -> Result<TriggerBindings> {
        let mut bindings = TriggerBindings::new();
        for (hook, specs) in self.hooks.iter() {
            let specs = specs
                .iter()
                .map(RawCommandSpec::to_spec)
                .collect::<Result<Vec<_>>>()?;
            bindings.insert(hook.clone(), specs);
        }
        Ok(bindings)
    }
}
