//! Type definitions for Claude CLI invocations
//!
//! - [`request`] - A single prompt plus its continuation setting
//! - [`scenario`] - Titled prompt sequences, including the cats/dogs presets

pub mod request;
pub mod scenario;

pub use request::InvocationRequest;
pub use scenario::{RECALL_PROMPT, Scenario};
