//! Subprocess invoker implementation using Claude Code CLI

use std::path::{Path, PathBuf};

use crate::Invoker;
use crate::error::{ClaudeError, Result};
use crate::types::InvocationRequest;

use super::config::{DEFAULT_CLI_NAME, DEFAULT_CONTINUE_FLAG, common_install_locations};

/// Subprocess invoker for Claude Code CLI
///
/// Holds no per-call state: every [`Invoker::invoke`] spawns a fresh process,
/// and any memory shared between calls lives inside the CLI's own session store.
#[derive(Debug, Clone)]
pub struct SubprocessInvoker {
    pub(super) cli_path: PathBuf,
    pub(super) continue_flag: String,
}

impl SubprocessInvoker {
    /// Create a new subprocess invoker
    ///
    /// # Arguments
    /// * `cli_path` - Optional executable name or path (will search if None)
    ///
    /// # Errors
    /// Returns error if the CLI cannot be found
    pub fn new(cli_path: Option<PathBuf>) -> Result<Self> {
        let cli_path = match cli_path {
            Some(path) => Self::resolve(&path)?,
            None => Self::find_cli()?,
        };

        Ok(Self {
            cli_path,
            continue_flag: DEFAULT_CONTINUE_FLAG.to_string(),
        })
    }

    /// Use a different continuation argument than `-c`
    #[must_use]
    pub fn with_continue_flag(mut self, flag: impl Into<String>) -> Self {
        self.continue_flag = flag.into();
        self
    }

    /// Resolved path of the executable
    #[must_use]
    pub fn cli_path(&self) -> &Path {
        &self.cli_path
    }

    /// Argument passed when a request continues the previous session
    #[must_use]
    pub fn continue_flag(&self) -> &str {
        &self.continue_flag
    }

    /// Find Claude Code CLI binary
    ///
    /// # Errors
    /// Returns error if CLI cannot be found in PATH or common locations
    pub fn find_cli() -> Result<PathBuf> {
        if let Ok(path) = which::which(DEFAULT_CLI_NAME) {
            return Ok(path);
        }

        common_install_locations()
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(ClaudeError::cli_not_found)
    }

    /// Resolve a user-supplied name or path through the command search path
    fn resolve(path: &Path) -> Result<PathBuf> {
        which::which(path)
            .map_err(|e| ClaudeError::CliNotFound(format!("{}: {e}", path.display())))
    }
}

impl Invoker for SubprocessInvoker {
    async fn invoke(&self, request: &InvocationRequest) -> Result<String> {
        self.invoke_impl(request).await
    }
}
