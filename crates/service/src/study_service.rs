//! Submit pipeline: validate, prompt, complete, parse, persist.

use std::sync::Arc;

use studymate_core::{FeatureType, NewStudySession, StudyOutput, build_prompt_for, parse_summary};
use studymate_llm::Completion;

use crate::caller::Caller;
use crate::error::ServiceError;
use crate::history_service::HistoryService;
use crate::request::{StudyRequest, StudyResponse};
use crate::sequencer::SubmissionSequencer;

pub struct StudyService {
    llm: Option<Arc<dyn Completion>>,
    history: Arc<HistoryService>,
    sequencer: SubmissionSequencer,
}

impl StudyService {
    #[must_use]
    pub fn new(llm: Arc<dyn Completion>, history: Arc<HistoryService>) -> Self {
        Self { llm: Some(llm), history, sequencer: SubmissionSequencer::new() }
    }

    /// A service that can serve history but rejects submissions.
    #[must_use]
    pub fn without_completion(history: Arc<HistoryService>) -> Self {
        Self { llm: None, history, sequencer: SubmissionSequencer::new() }
    }

    #[must_use]
    pub fn history(&self) -> &Arc<HistoryService> {
        &self.history
    }

    /// Run one feature for `caller`.
    ///
    /// Completion failures abort with nothing saved. A failed save is logged and
    /// the answer is still returned, without a session id.
    pub async fn submit(
        &self,
        caller: &Caller,
        request: StudyRequest,
    ) -> Result<StudyResponse, ServiceError> {
        request.validate()?;
        let Some(llm) = &self.llm else {
            return Err(ServiceError::NotConfigured(
                "STUDYMATE_API_KEY is not set; study features are unavailable".to_owned(),
            ));
        };

        let ticket = self.sequencer.begin(caller).await;
        tracing::info!(
            feature = %request.feature,
            sequence = ticket.sequence(),
            identified = caller.has_identity(),
            "study request"
        );

        let outcome = self.run(llm.as_ref(), caller, &request).await;
        // Every ticket is retired, including failed submissions.
        let superseded = !self.sequencer.finish(&ticket).await;
        let (raw_reply, output, session_id) = outcome?;
        if superseded {
            tracing::debug!(
                sequence = ticket.sequence(),
                "response superseded by a newer submission"
            );
        }

        Ok(StudyResponse {
            feature: request.feature,
            raw_reply,
            output,
            session_id,
            sequence: ticket.sequence(),
            superseded,
        })
    }

    async fn run(
        &self,
        llm: &dyn Completion,
        caller: &Caller,
        request: &StudyRequest,
    ) -> Result<(String, StudyOutput, Option<String>), ServiceError> {
        let feature = request.feature;
        let prompt = build_prompt_for(feature, &request.input, &request.modifiers);
        let raw_reply = llm.complete(feature, &prompt).await.map_err(|e| {
            tracing::warn!(feature = %feature, error = %e, "completion failed");
            ServiceError::from(e)
        })?;

        let output = match feature {
            FeatureType::Summarizer => StudyOutput::Summary(parse_summary(&raw_reply)),
            FeatureType::Solver | FeatureType::Explainer | FeatureType::Questions => {
                StudyOutput::Text(raw_reply.clone())
            },
        };

        let session_id = match self.persist(caller, request, &output).await {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!(feature = %feature, error = %e, "failed to save study session");
                None
            },
        };
        Ok((raw_reply, output, session_id))
    }

    async fn persist(
        &self,
        caller: &Caller,
        request: &StudyRequest,
        output: &StudyOutput,
    ) -> Result<Option<String>, ServiceError> {
        if !caller.has_identity() {
            return Ok(None);
        }
        let session = NewStudySession::from_output(
            request.feature,
            request.session_subject(),
            request.input.clone(),
            output,
        )?;
        Ok(self.history.save(caller, &session).await?.map(|saved| saved.id))
    }
}
