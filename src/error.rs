//! Error types for Claude CLI invocations

use thiserror::Error;

/// Main error type for invoking the Claude CLI
#[derive(Error, Debug)]
pub enum ClaudeError {
    /// Claude Code CLI not found or not installed
    #[error("Claude Code CLI not found: {0}")]
    CliNotFound(String),

    /// The executable was found but the OS refused to start it
    #[error("Failed to start Claude Code: {0}")]
    Spawn(String),

    /// The CLI ran and exited with a non-zero code
    #[error("Claude CLI exited with code {exit_code}: {stderr}")]
    Process {
        /// Process exit code
        exit_code: i32,
        /// Everything the process wrote to stderr
        stderr: String,
    },

    /// The CLI was killed by a signal and has no exit code
    #[error("Claude CLI terminated by signal: {stderr}")]
    Terminated {
        /// Everything the process wrote to stderr before it died
        stderr: String,
    },

    /// Pipe handling error
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Claude CLI operations
pub type Result<T> = std::result::Result<T, ClaudeError>;

impl ClaudeError {
    /// Create a CLI not found error
    #[must_use]
    pub fn cli_not_found() -> Self {
        Self::CliNotFound(
            "Claude Code not found. Install with:\n\
             npm install -g @anthropic-ai/claude-code\n\
             \n\
             If already installed locally, try:\n\
             export PATH=\"$HOME/node_modules/.bin:$PATH\"\n\
             \n\
             Or pass --cli-path / set CLAUDE_CLI_PATH"
                .to_string(),
        )
    }

    /// Create a spawn error
    pub fn spawn(msg: impl Into<String>) -> Self {
        Self::Spawn(msg.into())
    }

    /// Create a process error
    pub fn process(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::Process {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create a terminated-by-signal error
    pub fn terminated(stderr: impl Into<String>) -> Self {
        Self::Terminated {
            stderr: stderr.into(),
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Exit code of the failed process, if it ran to completion
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Process { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}
