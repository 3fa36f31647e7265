//! Typed error enum for the completion client.

use thiserror::Error;

/// Errors from completion API calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("completion service error: {0}")]
    Api(String),
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: no content returned")]
    EmptyResponse,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LlmError {
    /// Short message suitable for showing to the person who submitted the request.
    ///
    /// Messages supplied by the completion service are passed through; local
    /// transport and decoding failures collapse into a generic sentence.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpStatus { body, .. } if !body.trim().is_empty() => body.trim().to_owned(),
            Self::Api(message) if !message.trim().is_empty() => message.trim().to_owned(),
            Self::HttpRequest(_) => "Could not reach the AI service. Please try again.".to_owned(),
            Self::EmptyResponse => "The AI service returned an empty answer.".to_owned(),
            Self::HttpStatus { .. }
            | Self::Api(_)
            | Self::JsonParse { .. }
            | Self::ClientInit(_) => {
                "The AI service could not complete the request.".to_owned()
            },
        }
    }
}
