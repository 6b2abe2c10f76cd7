//! Runtime context for a run.
//!
//! The [`RuntimeContext`] holds everything the run needs once flags,
//! environment, and the config file have been merged.

use anyhow::{Context, Result};
use qclear_config::{CleanerConfig, ConfigOverrides, load_config};

use crate::cli::Cli;

/// Runtime context built once in `main` after CLI parsing.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Resolved server address and timeout.
    pub config: CleanerConfig,

    /// Skip the confirmation prompt.
    pub force: bool,

    /// Install the debug log subscriber on stderr.
    pub verbose: bool,
}

impl RuntimeContext {
    /// Builds the context, layering CLI flags over environment and file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let overrides = ConfigOverrides {
            url: cli.url.clone(),
            timeout_secs: cli.timeout,
        };
        let config = load_config(cli.config.as_deref(), &overrides)
            .context("invalid configuration")?;

        Ok(Self {
            config,
            force: cli.force,
            verbose: cli.verbose,
        })
    }
}
