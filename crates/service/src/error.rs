//! Typed error enum for the service layer.

use studymate_core::CoreError;
use studymate_llm::LlmError;
use studymate_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and completion failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Completion API call failed.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// Caller provided invalid input (empty text, out-of-range modifier).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required collaborator was not configured (e.g. no API key).
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Feature output could not be serialized for storage.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
