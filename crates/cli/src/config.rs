//! Runtime configuration read from the environment.

use std::time::Duration;

use studymate_core::{env_non_empty, env_parse_with_default};
use studymate_llm::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, LlmClient};
use thiserror::Error;

pub(crate) const API_KEY_VAR: &str = "STUDYMATE_API_KEY";
pub(crate) const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("{0} environment variable must be set")]
    MissingVar(&'static str),

    #[error("invalid completion client configuration: {0}")]
    Client(#[from] studymate_llm::LlmError),
}

#[derive(Clone)]
pub(crate) struct AppConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub database_url: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("database_url", &self.database_url.as_ref().map(|_| "***"))
            .finish()
    }
}

impl AppConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            api_key: env_non_empty(API_KEY_VAR),
            api_url: env_non_empty("STUDYMATE_API_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            model: env_non_empty("STUDYMATE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            timeout_secs: env_parse_with_default(
                "STUDYMATE_LLM_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            ),
            database_url: env_non_empty(DATABASE_URL_VAR),
        }
    }

    /// Database for commands whose sessions must outlive the process.
    pub(crate) fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url.as_deref().ok_or(ConfigError::MissingVar(DATABASE_URL_VAR))
    }

    /// Build the completion client. Fails when no API key is configured.
    pub(crate) fn llm_client(&self) -> Result<LlmClient, ConfigError> {
        let api_key = self.api_key.clone().ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        let client = LlmClient::with_timeout(
            api_key,
            self.api_url.clone(),
            Duration::from_secs(self.timeout_secs.max(1)),
        )?
        .with_model(self.model.clone());
        Ok(client)
    }
}
