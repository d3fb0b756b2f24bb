//! Lifecycle of a single invocation (spawn, feed, drain, wait)

use std::io::ErrorKind;
use std::process::ExitStatus;

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin};

use crate::error::{ClaudeError, Result};
use crate::types::InvocationRequest;

use super::command::CommandBuilder;
use super::reader::drain;
use super::transport::SubprocessInvoker;

impl SubprocessInvoker {
    /// Spawn the CLI with all three stdio streams piped
    ///
    /// # Errors
    /// Returns error if the OS cannot start the process
    pub(super) fn spawn_impl(&self, request: &InvocationRequest) -> Result<Child> {
        let builder = CommandBuilder::new(&self.cli_path, &self.continue_flag, request);
        log::debug!(
            "Spawning {} {:?} ({} prompt bytes)",
            self.cli_path.display(),
            builder.args(),
            request.prompt().len()
        );

        builder
            .build()
            .spawn()
            .map_err(|e| ClaudeError::spawn(format!("{}: {e}", self.cli_path.display())))
    }

    /// Run one invocation to completion
    ///
    /// The prompt write, both stream drains and the exit wait run concurrently;
    /// this resolves only after all four have finished.
    ///
    /// # Errors
    /// Returns error if spawning, piping or waiting fails, or the exit status is not success
    pub(super) async fn invoke_impl(&self, request: &InvocationRequest) -> Result<String> {
        let mut child = self.spawn_impl(request)?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ClaudeError::transport("Failed to get stdin handle"))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ClaudeError::transport("Failed to get stdout handle"))?;

        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| ClaudeError::transport("Failed to get stderr handle"))?;

        let ((), stdout, stderr, status) = futures::try_join!(
            feed_prompt(stdin, request.prompt()),
            drain(stdout, "stdout"),
            drain(stderr, "stderr"),
            async { child.wait().await.map_err(ClaudeError::from) },
        )?;

        log::debug!(
            "Claude CLI exited with {status} ({} stdout bytes, {} stderr bytes)",
            stdout.len(),
            stderr.len()
        );

        outcome(status, stdout, stderr)
    }
}

/// Write the whole prompt, then close stdin so the CLI sees end-of-input
///
/// A child that exits without reading its input closes the pipe under us;
/// that is not an invocation failure, the exit status decides.
async fn feed_prompt(mut stdin: ChildStdin, prompt: &str) -> Result<()> {
    let written = async {
        stdin.write_all(prompt.as_bytes()).await?;
        stdin.shutdown().await
    };

    match written.await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            log::warn!("Claude CLI closed stdin before reading the whole prompt");
            Ok(())
        }
        Err(e) => Err(ClaudeError::transport(format!(
            "Failed to write to stdin: {e}"
        ))),
    }
}

/// Map the exit status and captured streams to the invocation result
fn outcome(status: ExitStatus, stdout: String, stderr: String) -> Result<String> {
    if status.success() {
        return Ok(stdout);
    }

    match status.code() {
        Some(code) => Err(ClaudeError::process(code, stderr)),
        None => Err(ClaudeError::terminated(stderr)),
    }
}
