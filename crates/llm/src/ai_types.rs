use serde::{Deserialize, Serialize};
use studymate_core::FeatureType;

#[derive(Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub(crate) fn for_feature(model: &str, feature: FeatureType, prompt: &str) -> Self {
        Self {
            model: model.to_owned(),
            messages: vec![
                Message {
                    role: "system".to_owned(),
                    content: feature.system_instruction().to_owned(),
                },
                Message { role: "user".to_owned(), content: prompt.to_owned() },
            ],
            max_tokens: feature.max_tokens(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
pub(crate) struct Choice {
    pub message: ResponseMessage,
}

#[derive(Deserialize)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// `{"error": ...}` envelope returned by the completion service on failure.
#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Either `"error": "text"` or `"error": {"message": "text", ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiErrorBody {
    Message(String),
    Detailed { message: String },
}

impl ApiErrorBody {
    pub(crate) fn into_message(self) -> String {
        match self {
            Self::Message(message) | Self::Detailed { message } => message,
        }
    }
}
