//! Response types (Serialize)

use chrono::{DateTime, Utc};
use serde::Serialize;
use studymate_core::{FeatureType, StudyOutput, StudySession, SummaryData};
use studymate_service::StudyResponse;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Body of a successful `POST /api/study`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyResponseBody {
    /// Reply text; the serialized summary for the summarizer.
    pub response: String,
    pub feature: FeatureType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub sequence: u64,
    pub superseded: bool,
}

impl StudyResponseBody {
    pub fn from_response(response: StudyResponse) -> Result<Self, serde_json::Error> {
        Ok(Self {
            response: response.output.to_output_text()?,
            feature: response.feature,
            summary: response.output.summary().cloned(),
            session_id: response.session_id,
            sequence: response.sequence,
            superseded: response.superseded,
        })
    }
}

/// One row of `GET /api/history`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryView {
    pub id: String,
    pub feature_type: FeatureType,
    pub subject: Option<String>,
    pub input_text: String,
    pub output_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<StudySession> for SessionSummaryView {
    fn from(session: StudySession) -> Self {
        Self {
            id: session.id,
            feature_type: session.feature_type,
            subject: session.subject,
            input_text: session.input_text,
            output_text: session.output_text,
            created_at: session.created_at,
        }
    }
}

/// Expanded history entry with the output decoded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub session: SessionSummaryView,
    pub output: StudyOutput,
}

impl From<StudySession> for HistoryEntry {
    fn from(session: StudySession) -> Self {
        let output = session.output();
        Self { session: session.into(), output }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: bool,
    pub session_id: String,
}
