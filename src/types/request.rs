//! Invocation request type
//!
//! A request is one prompt plus the choice of whether the CLI should continue
//! its most recent session. It is immutable once built.

/// One prompt to send to the Claude CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    prompt: String,
    continue_conversation: bool,
}

impl InvocationRequest {
    /// Create a new request
    pub fn new(prompt: impl Into<String>, continue_conversation: bool) -> Self {
        Self {
            prompt: prompt.into(),
            continue_conversation,
        }
    }

    /// Request that starts from a blank session
    pub fn fresh(prompt: impl Into<String>) -> Self {
        Self::new(prompt, false)
    }

    /// Request that continues the CLI's most recent session
    pub fn continued(prompt: impl Into<String>) -> Self {
        Self::new(prompt, true)
    }

    /// Prompt text written to the CLI's stdin
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether the continuation flag is passed
    #[must_use]
    pub const fn continue_conversation(&self) -> bool {
        self.continue_conversation
    }
}
