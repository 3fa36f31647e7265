//! List state behind a history page.

use studymate_core::{FeatureType, StudySession};

use crate::caller::Caller;
use crate::error::ServiceError;
use crate::history_service::HistoryService;

/// Loaded sessions plus the one currently expanded, if any.
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    sessions: Vec<StudySession>,
    expanded: Option<String>,
}

impl HistoryView {
    pub async fn load(
        history: &HistoryService,
        caller: &Caller,
        feature: Option<FeatureType>,
    ) -> Result<Self, ServiceError> {
        let sessions = history.recent(caller, feature, None).await?;
        Ok(Self::from_sessions(sessions))
    }

    #[must_use]
    pub const fn from_sessions(sessions: Vec<StudySession>) -> Self {
        Self { sessions, expanded: None }
    }

    #[must_use]
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Expand `id`, or collapse it when it is already expanded.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_owned());
        }
    }

    /// Delete one session with a single store call.
    ///
    /// The entry leaves the list whether or not the store still had the row.
    /// On error the list is untouched.
    pub async fn delete(
        &mut self,
        history: &HistoryService,
        caller: &Caller,
        id: &str,
    ) -> Result<bool, ServiceError> {
        let deleted = history.delete(caller, id).await?;
        self.sessions.retain(|s| s.id != id);
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        }
        Ok(deleted)
    }
}
