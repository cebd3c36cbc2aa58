// src/config/validate.rs

use std::collections::HashSet;

use crate::command::Template;
use crate::config::model::{ConfigFile, RawCommandSpec, RawConfigFile};
use crate::errors::{HookshellError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::HookshellError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.host, raw.hooks))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_host_hooks(cfg)?;
    validate_hook_names(cfg)?;
    validate_templates(cfg)?;
    Ok(())
}

fn validate_host_hooks(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for name in cfg.host.hooks.iter() {
        if name.trim().is_empty() {
            return Err(HookshellError::ConfigError(
                "[host].hooks must not contain blank hook names".to_string(),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(HookshellError::ConfigError(format!(
                "[host].hooks lists '{}' more than once",
                name
            )));
        }
    }
    Ok(())
}

fn validate_hook_names(cfg: &RawConfigFile) -> Result<()> {
    if cfg.hooks.keys().any(|name| name.trim().is_empty()) {
        return Err(HookshellError::ConfigError(
            "[hooks] contains a blank hook name".to_string(),
        ));
    }
    Ok(())
}

fn validate_templates(cfg: &RawConfigFile) -> Result<()> {
    for (hook, specs) in cfg.hooks.iter() {
        for spec in specs.iter() {
            if let RawCommandSpec::Template(t) = spec {
                Template::parse(&t.template).map_err(|e| {
                    HookshellError::ConfigError(format!("hook '{}': {}", hook, e))
                })?;
            }
        }
    }
    Ok(())
}
