use std::time::Duration;

use async_trait::async_trait;
use studymate_core::FeatureType;

use crate::Completion;
use crate::ai_types::{ChatRequest, ChatResponse, ErrorEnvelope};
use crate::error::LlmError;

/// Default model name.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default completion service base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
/// Default transport timeout for one completion call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client for the completion API.
pub struct LlmClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl LlmClient {
    /// Creates a client with the default model and transport timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        Self::with_timeout(api_key, base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn with_timeout(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url, model: DEFAULT_MODEL.to_owned() })
    }

    /// Sets a custom model for this client.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a chat completion request and return the reply text.
    ///
    /// # Errors
    /// Returns an error if the request fails, the service answers with a
    /// non-success status or an `error` field, the body cannot be decoded, or
    /// the reply carries no content.
    pub(crate) async fn chat_completion(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = extract_error_message(&body).unwrap_or(body);
            tracing::warn!(status = status.as_u16(), "completion service returned an error status");
            return Err(LlmError::HttpStatus { code: status.as_u16(), body: message });
        }

        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::JsonParse {
                context: format!("chat completion response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        if let Some(error) = chat_response.error {
            return Err(LlmError::Api(error.into_message()));
        }

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl Completion for LlmClient {
    async fn complete(&self, feature: FeatureType, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest::for_feature(&self.model, feature, prompt);
        tracing::debug!(
            feature = %feature,
            model = %self.model,
            prompt_len = prompt.len(),
            max_tokens = request.max_tokens,
            "sending completion request"
        );
        self.chat_completion(&request).await
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body).ok().map(|envelope| envelope.error.into_message())
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
