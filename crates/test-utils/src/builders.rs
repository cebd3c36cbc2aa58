#![allow(dead_code)]

use std::collections::BTreeMap;

use hookshell::command::CommandSpec;
use hookshell::config::{
    ConfigFile, ConfigSection, HostSection, RawCommandSpec, RawConfigFile, StructuredCommand,
    TemplateCommand,
};
use hookshell::hooks::TriggerBindings;
use hookshell::types::StdioMode;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                host: HostSection::default(),
                hooks: BTreeMap::new(),
            },
        }
    }

    pub fn watch(mut self, val: bool) -> Self {
        self.config.config.watch = val;
        self
    }

    pub fn stdio(mut self, mode: StdioMode) -> Self {
        self.config.config.stdio = mode;
        self
    }

    pub fn host_hooks(mut self, names: &[&str]) -> Self {
        self.config.host.hooks = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn literal(mut self, hook: &str, line: &str) -> Self {
        self.push(hook, RawCommandSpec::Literal(line.to_string()));
        self
    }

    pub fn structured(mut self, hook: &str, command: &str, args: &[&str]) -> Self {
        self.push(
            hook,
            RawCommandSpec::Structured(StructuredCommand {
                command: command.to_string(),
                args: args.iter().map(|s| s.to_string()).collect(),
            }),
        );
        self
    }

    pub fn template(mut self, hook: &str, template: &str) -> Self {
        self.push(
            hook,
            RawCommandSpec::Template(TemplateCommand {
                template: template.to_string(),
            }),
        );
        self
    }

    fn push(&mut self, hook: &str, spec: RawCommandSpec) {
        self.config.hooks.entry(hook.to_string()).or_default().push(spec);
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TriggerBindings` when a test needs `CommandSpec`s that a
/// config file cannot express (closures).
#[derive(Default)]
pub struct BindingsBuilder {
    bindings: TriggerBindings,
}

impl BindingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, hook: &str, spec: CommandSpec) -> Self {
        self.bindings.entry(hook.to_string()).or_default().push(spec);
        self
    }

    pub fn build(self) -> TriggerBindings {
        self.bindings
    }
}
