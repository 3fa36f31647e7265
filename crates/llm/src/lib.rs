//! Completion client for the study features.
//!
//! One request, one reply: the prompt built by `studymate-core` goes out with
//! the feature's system instruction and token limit, and the raw reply text
//! comes back. Failures are surfaced as-is; nothing is retried.

mod ai_types;
mod client;
mod error;

use async_trait::async_trait;
use studymate_core::FeatureType;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, LlmClient, truncate};
pub use error::LlmError;

/// Source of completion replies.
///
/// Implemented by [`LlmClient`]; the service layer depends on this trait so
/// the completion service can be swapped out.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Send `prompt` for `feature` and return the raw reply text.
    async fn complete(&self, feature: FeatureType, prompt: &str) -> Result<String, LlmError>;
}
