//! Request/query types (Deserialize)

use serde::Deserialize;
use studymate_core::{CoreError, FeatureType, PromptModifiers};
use studymate_service::StudyRequest;

/// Body of `POST /api/study`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBody {
    pub feature: String,
    #[serde(default)]
    pub input: String,
    pub subject: Option<String>,
    pub grade_level: Option<String>,
    pub summary_length: Option<String>,
    pub question_count: Option<u32>,
    pub question_type: Option<String>,
}

impl StudyBody {
    /// Parse the string fields. Range checks happen in the service.
    pub fn into_request(self) -> Result<StudyRequest, CoreError> {
        let feature: FeatureType = self.feature.parse()?;
        let mut modifiers = PromptModifiers {
            subject: self.subject,
            grade_level: self.grade_level,
            ..PromptModifiers::default()
        };
        if let Some(length) = self.summary_length.as_deref().filter(|s| !s.trim().is_empty()) {
            modifiers.summary_length = length.parse()?;
        }
        if let Some(kind) = self.question_type.as_deref().filter(|s| !s.trim().is_empty()) {
            modifiers.question_type = kind.parse()?;
        }
        if let Some(count) = self.question_count {
            modifiers.question_count = u8::try_from(count).unwrap_or(u8::MAX);
        }
        Ok(StudyRequest::new(feature, self.input).with_modifiers(modifiers))
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub feature: Option<String>,
    pub limit: Option<usize>,
}

impl HistoryQuery {
    /// Empty `feature` means all features.
    pub fn feature(&self) -> Result<Option<FeatureType>, CoreError> {
        self.feature
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::parse::<FeatureType>)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use studymate_core::{QuestionType, SummaryLength};

    use super::*;

    fn body(json: serde_json::Value) -> StudyBody {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_camel_case_modifiers() {
        let request = body(serde_json::json!({
            "feature": "Questions",
            "input": "the water cycle",
            "gradeLevel": "8th grade",
            "summaryLength": "short",
            "questionCount": 7,
            "questionType": "true-false"
        }))
        .into_request()
        .unwrap();
        assert_eq!(request.feature, FeatureType::Questions);
        assert_eq!(request.modifiers.grade_level.as_deref(), Some("8th grade"));
        assert_eq!(request.modifiers.summary_length, SummaryLength::Short);
        assert_eq!(request.modifiers.question_count, 7);
        assert_eq!(request.modifiers.question_type, QuestionType::TrueFalse);
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let err = body(serde_json::json!({"feature": "poetry", "input": "x"})).into_request();
        assert!(matches!(err, Err(CoreError::UnknownFeature(_))));
    }

    #[test]
    fn test_oversized_count_saturates() {
        let json = serde_json::json!({"feature": "questions", "input": "x", "questionCount": 999});
        let request = body(json).into_request().unwrap();
        assert_eq!(request.modifiers.question_count, u8::MAX);
    }

    #[test]
    fn test_history_feature_filter() {
        let query = HistoryQuery { feature: Some(" ".to_owned()), limit: None };
        assert_eq!(query.feature().unwrap(), None);
        let query = HistoryQuery { feature: Some("solver".to_owned()), limit: None };
        assert_eq!(query.feature().unwrap(), Some(FeatureType::Solver));
    }
}
