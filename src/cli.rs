//! Command-line arguments
//!
//! Defines the clap parser for the `claude-context-check` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::transport::subprocess::DEFAULT_CONTINUE_FLAG;

/// Compare isolated Claude CLI calls with calls chained by the continuation flag
#[derive(Parser, Debug)]
#[command(name = "claude-context-check", version, long_about = None)]
pub struct Cli {
    /// Claude CLI executable name or path (default: `claude` on PATH)
    #[arg(long, env = "CLAUDE_CLI_PATH")]
    pub cli_path: Option<PathBuf>,

    /// Argument that asks the CLI to continue its previous session
    #[arg(long, default_value = DEFAULT_CONTINUE_FLAG, allow_hyphen_values = true)]
    pub continue_flag: String,
}
