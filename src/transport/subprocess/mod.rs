//! Subprocess invoker using the Claude Code CLI
//!
//! Each invocation spawns the CLI, writes the prompt to its stdin, and drains
//! stdout and stderr until the process exits.

mod command;
mod config;
mod lifecycle;
mod reader;
mod transport;

// Re-export public types
pub use config::{DEFAULT_CLI_NAME, DEFAULT_CONTINUE_FLAG};
pub use transport::SubprocessInvoker;
