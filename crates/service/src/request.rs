use studymate_core::{FeatureType, MAX_QUESTION_COUNT, PromptModifiers, StudyOutput};

use crate::error::ServiceError;

/// One feature invocation as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyRequest {
    pub feature: FeatureType,
    pub input: String,
    pub modifiers: PromptModifiers,
}

impl StudyRequest {
    #[must_use]
    pub fn new(feature: FeatureType, input: impl Into<String>) -> Self {
        Self { feature, input: input.into(), modifiers: PromptModifiers::default() }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: PromptModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Reject requests that must never reach the completion service.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.input.trim().is_empty() {
            return Err(ServiceError::InvalidInput("input text is empty".to_owned()));
        }
        let count = self.modifiers.question_count;
        if self.feature == FeatureType::Questions && !(1..=MAX_QUESTION_COUNT).contains(&count) {
            return Err(ServiceError::InvalidInput(format!(
                "question count must be between 1 and {MAX_QUESTION_COUNT}, got {count}"
            )));
        }
        Ok(())
    }

    /// Value stored in the session's `subject` column.
    ///
    /// Summaries record their length and question sets their type; the other
    /// features keep the free-form subject tag.
    #[must_use]
    pub fn session_subject(&self) -> Option<String> {
        match self.feature {
            FeatureType::Summarizer => Some(self.modifiers.summary_length.as_str().to_owned()),
            FeatureType::Questions => Some(self.modifiers.question_type.as_str().to_owned()),
            FeatureType::Solver | FeatureType::Explainer => self
                .modifiers
                .subject
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        }
    }
}

/// Outcome of [`crate::StudyService::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyResponse {
    pub feature: FeatureType,
    /// Reply text exactly as the completion service returned it.
    pub raw_reply: String,
    pub output: StudyOutput,
    /// Id of the saved session; `None` for anonymous callers or failed saves.
    pub session_id: Option<String>,
    pub sequence: u64,
    /// A newer submission from the same caller started before this one finished.
    pub superseded: bool,
}

#[cfg(test)]
mod tests {
    use studymate_core::{QuestionType, SummaryLength};

    use super::*;

    #[test]
    fn test_blank_input_rejected() {
        let err = StudyRequest::new(FeatureType::Solver, "  \n\t").validate().unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn test_question_count_out_of_range() {
        for count in [0, MAX_QUESTION_COUNT + 1] {
            let modifiers = PromptModifiers { question_count: count, ..PromptModifiers::default() };
            let request =
                StudyRequest::new(FeatureType::Questions, "cells").with_modifiers(modifiers);
            assert!(request.validate().is_err(), "count {count} accepted");
        }
    }

    #[test]
    fn test_question_count_ignored_for_other_features() {
        let modifiers = PromptModifiers { question_count: 0, ..PromptModifiers::default() };
        let request =
            StudyRequest::new(FeatureType::Explainer, "osmosis").with_modifiers(modifiers);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_session_subject_per_feature() {
        let modifiers = PromptModifiers {
            subject: Some(" Biology ".to_owned()),
            summary_length: SummaryLength::Long,
            question_type: QuestionType::TrueFalse,
            ..PromptModifiers::default()
        };
        let subject = |feature| {
            StudyRequest::new(feature, "x").with_modifiers(modifiers.clone()).session_subject()
        };
        assert_eq!(subject(FeatureType::Summarizer).as_deref(), Some("long"));
        let questions = subject(FeatureType::Questions);
        assert_eq!(questions.as_deref(), Some(QuestionType::TrueFalse.as_str()));
        assert_eq!(subject(FeatureType::Solver).as_deref(), Some("Biology"));
        assert_eq!(StudyRequest::new(FeatureType::Explainer, "x").session_subject(), None);
    }
}
