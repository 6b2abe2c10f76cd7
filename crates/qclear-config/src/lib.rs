//! Configuration management for qclear.
//!
//! Settings are layered with figment: built-in defaults, an optional
//! YAML/TOML file, `QCLEAR_*` environment variables, then command-line
//! overrides. See [`config::load_config`].

pub mod config;

pub use config::{CleanerConfig, ConfigError, ConfigOverrides, load_config};
