// src/config/mod.rs

//! Configuration loading and validation.
//!
//! - [`model`] mirrors the TOML file.
//! - [`loader`] reads it from disk.
//! - [`validate`] turns the raw file into a checked [`ConfigFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, parse_and_validate};
pub use model::{
    ConfigFile, ConfigSection, HostSection, RawCommandSpec, RawConfigFile, StructuredCommand,
    TemplateCommand,
};
