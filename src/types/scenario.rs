//! Scenario definitions
//!
//! A scenario is a titled, ordered list of prompts that all share the same
//! continuation setting. The two presets reproduce the cats/dogs comparison.

use super::request::InvocationRequest;

/// Second prompt of both presets; only answerable with retained context
pub const RECALL_PROMPT: &str = "What was the animal I just asked about?";

/// A fixed sequence of prompts sent with the same continuation setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    title: String,
    continue_conversation: bool,
    prompts: Vec<String>,
}

impl Scenario {
    /// Create a new scenario
    pub fn new<P>(title: impl Into<String>, continue_conversation: bool, prompts: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            title: title.into(),
            continue_conversation,
            prompts: prompts.into_iter().map(Into::into).collect(),
        }
    }

    /// Every call starts a fresh session, so the recall question cannot be answered
    #[must_use]
    pub fn isolated() -> Self {
        Self::new(
            "=== Testing WITHOUT --continue flag ===",
            false,
            ["Tell me one interesting fact about cats.", RECALL_PROMPT],
        )
    }

    /// Every call continues the previous session, so the CLI should recall "dogs"
    #[must_use]
    pub fn context_retained() -> Self {
        Self::new(
            "=== Testing WITH --continue flag ===",
            true,
            ["Tell me one interesting fact about dogs.", RECALL_PROMPT],
        )
    }

    /// Both presets, isolated first
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::isolated(), Self::context_retained()]
    }

    /// Header printed before the first call
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether every call in this scenario passes the continuation flag
    #[must_use]
    pub const fn continue_conversation(&self) -> bool {
        self.continue_conversation
    }

    /// Prompts in send order
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// One request per prompt, in send order
    pub fn requests(&self) -> impl Iterator<Item = InvocationRequest> + '_ {
        self.prompts
            .iter()
            .map(|prompt| InvocationRequest::new(prompt.as_str(), self.continue_conversation))
    }
}
