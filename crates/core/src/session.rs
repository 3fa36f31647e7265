use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feature::FeatureType;
use crate::summary::SummaryData;
use crate::summary_parser::parse_summary;

/// One persisted study interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    pub feature_type: FeatureType,
    pub subject: Option<String>,
    pub input_text: String,
    pub output_text: String,
    pub created_at: DateTime<Utc>,
}

impl StudySession {
    /// Decode `output_text` for display.
    ///
    /// Summarizer rows hold serialized [`SummaryData`]; a row that does not
    /// decode (raw reply text) is run through the parser instead.
    #[must_use]
    pub fn output(&self) -> StudyOutput {
        match self.feature_type {
            FeatureType::Summarizer => {
                match serde_json::from_str::<SummaryData>(&self.output_text) {
                    Ok(summary) => StudyOutput::Summary(summary),
                    Err(e) => {
                        tracing::debug!(
                            id = %self.id,
                            error = %e,
                            "summary row is not JSON, re-parsing"
                        );
                        StudyOutput::Summary(parse_summary(&self.output_text))
                    },
                }
            },
            FeatureType::Solver | FeatureType::Explainer | FeatureType::Questions => {
                StudyOutput::Text(self.output_text.clone())
            },
        }
    }
}

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudySession {
    pub feature_type: FeatureType,
    pub subject: Option<String>,
    pub input_text: String,
    pub output_text: String,
}

impl NewStudySession {
    /// Build an insert payload from a feature result.
    ///
    /// # Errors
    /// Returns an error if a summary cannot be serialized.
    pub fn from_output(
        feature_type: FeatureType,
        subject: Option<String>,
        input_text: String,
        output: &StudyOutput,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self { feature_type, subject, input_text, output_text: output.to_output_text()? })
    }
}

/// Result of one feature invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudyOutput {
    Text(String),
    Summary(SummaryData),
}

impl StudyOutput {
    /// Text stored in the `output_text` column.
    ///
    /// # Errors
    /// Returns an error if a summary cannot be serialized.
    pub fn to_output_text(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Summary(summary) => serde_json::to_string(summary),
        }
    }

    /// Human-readable rendering for terminals and logs.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Summary(summary) => summary.to_plain_text(),
        }
    }

    #[must_use]
    pub const fn summary(&self) -> Option<&SummaryData> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::Text(_) => None,
        }
    }
}
