//! Clap CLI definitions for the `qclear` command.
//!
//! A single command with no subcommands.

use std::path::PathBuf;

use clap::Parser;

/// qclear -- empty a Qdrant server.
///
/// Lists every collection with its point count and vector size, asks for
/// confirmation, then deletes all of them one at a time.
#[derive(Parser, Debug)]
#[command(
    name = "qclear",
    about = "Clear all collections from a Qdrant server",
    long_about = "Lists every collection on a Qdrant server with its point count and vector size, \
                  asks for confirmation, then deletes all of them one at a time.",
    version
)]
pub struct Cli {
    /// Qdrant server URL (default: http://localhost:6333).
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub force: bool,

    /// Configuration file (YAML, or TOML with a .toml extension).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds (default: wait indefinitely).
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable verbose/debug output on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
