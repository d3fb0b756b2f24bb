//! CLI command building logic for the subprocess invoker

use std::process::Stdio;
use tokio::process::Command;

use crate::types::InvocationRequest;

/// Command builder for Claude CLI
pub struct CommandBuilder<'a> {
    cli_path: &'a std::path::Path,
    continue_flag: &'a str,
    request: &'a InvocationRequest,
}

impl<'a> CommandBuilder<'a> {
    /// Create a new command builder
    pub fn new(
        cli_path: &'a std::path::Path,
        continue_flag: &'a str,
        request: &'a InvocationRequest,
    ) -> Self {
        Self {
            cli_path,
            continue_flag,
            request,
        }
    }

    /// Arguments passed after the executable path
    ///
    /// The prompt never appears here; it travels over stdin.
    pub fn args(&self) -> Vec<&'a str> {
        if self.request.continue_conversation() {
            vec![self.continue_flag]
        } else {
            Vec::new()
        }
    }

    /// Build the complete CLI command with all three stdio streams piped
    pub fn build(&self) -> Command {
        let mut cmd = Command::new(self.cli_path);
        cmd.args(self.args());

        // Pipe stderr rather than inheriting it: it is captured for the error
        // message and must not reach the parent terminal.
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd
    }
}
