//! # Claude CLI context check
//!
//! Demonstrates whether the Claude Code CLI remembers earlier prompts across
//! separate process invocations. Two scenarios are compared:
//!
//! 1. **Isolated** - every call spawns a fresh `claude` with no arguments, so
//!    "What was the animal I just asked about?" cannot be answered.
//! 2. **Context retained** - every call passes `-c`, so the CLI continues its
//!    most recent session and should answer "dogs".
//!
//! ## Quick Start
//!
//! ```no_run
//! use claude_context_check::{Scenario, ScenarioRunner, SubprocessInvoker};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let invoker = SubprocessInvoker::new(None)?;
//! let mut runner = ScenarioRunner::new(&invoker, std::io::stdout());
//! runner.run_all(&Scenario::defaults()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`transport`]: the [`Invoker`] trait and the subprocess implementation
//! - [`runner`]: sequential scenario execution and transcript output
//! - [`types`]: invocation requests and scenario definitions
//! - [`cli`]: command-line arguments for the binary
//! - [`error`]: error types and handling
//!
//! Any type implementing [`Invoker`] can stand in for the real CLI, which is
//! how the runner is tested without `claude` installed.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, ClaudeError>`](Result):
//!
//! ```no_run
//! # use claude_context_check::{ClaudeError, Invoker, InvocationRequest, SubprocessInvoker};
//! # async fn example(invoker: SubprocessInvoker) {
//! match invoker.invoke(&InvocationRequest::fresh("Hello")).await {
//!     Ok(text) => println!("{text}"),
//!     Err(ClaudeError::Process { exit_code, stderr }) => {
//!         log::error!("claude exited with {exit_code}: {stderr}");
//!     }
//!     Err(e) => log::error!("Error: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod runner;
pub mod transport;
pub mod types;

// Re-export commonly used types for external API
pub use error::{ClaudeError, Result};
pub use runner::{ScenarioRunner, run};
pub use transport::{Invoker, SubprocessInvoker};
pub use types::{InvocationRequest, RECALL_PROMPT, Scenario};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
