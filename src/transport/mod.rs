//! Transport layer for invoking the Claude Code CLI
//!
//! This module provides the invocation abstraction and the subprocess
//! implementation that launches the CLI once per prompt.

pub mod subprocess;

use crate::error::Result;
use crate::types::InvocationRequest;

/// Sends one prompt to Claude Code and returns its complete response
///
/// Implementations must not return before the response is complete, so that
/// callers awaiting `invoke` twice get a strict happens-before order between
/// the two calls.
pub trait Invoker: Send + Sync {
    /// Run one invocation to completion
    ///
    /// # Errors
    /// Returns error if the CLI cannot be launched or exits unsuccessfully
    fn invoke(
        &self,
        request: &InvocationRequest,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub use subprocess::SubprocessInvoker;
