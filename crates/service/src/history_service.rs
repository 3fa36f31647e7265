//! History service gating storage access on caller identity.

use std::sync::Arc;

use studymate_core::{
    FEATURE_HISTORY_LIMIT, FeatureType, HISTORY_LIMIT, NewStudySession, StudySession,
};
use studymate_storage::StudySessionStore;

use crate::caller::Caller;
use crate::error::ServiceError;

/// Per-user study history. Anonymous callers never reach the store.
#[derive(Clone)]
pub struct HistoryService {
    store: Arc<dyn StudySessionStore>,
}

impl HistoryService {
    #[must_use]
    pub fn new(store: Arc<dyn StudySessionStore>) -> Self {
        Self { store }
    }

    /// Largest page a history read may return.
    #[must_use]
    pub const fn page_limit(feature: Option<FeatureType>) -> usize {
        if feature.is_some() { FEATURE_HISTORY_LIMIT } else { HISTORY_LIMIT }
    }

    pub async fn save(
        &self,
        caller: &Caller,
        session: &NewStudySession,
    ) -> Result<Option<StudySession>, ServiceError> {
        let Some(user_id) = caller.user_id() else {
            tracing::debug!(feature = %session.feature_type, "anonymous caller, session not saved");
            return Ok(None);
        };
        let saved = self.store.insert_session(user_id, session).await?;
        tracing::info!(id = %saved.id, feature = %saved.feature_type, "study session saved");
        Ok(Some(saved))
    }

    pub async fn recent_all(&self, caller: &Caller) -> Result<Vec<StudySession>, ServiceError> {
        self.recent(caller, None, None).await
    }

    pub async fn recent_for_feature(
        &self,
        caller: &Caller,
        feature: FeatureType,
    ) -> Result<Vec<StudySession>, ServiceError> {
        self.recent(caller, Some(feature), None).await
    }

    /// Newest first. `limit` is clamped to [`Self::page_limit`].
    pub async fn recent(
        &self,
        caller: &Caller,
        feature: Option<FeatureType>,
        limit: Option<usize>,
    ) -> Result<Vec<StudySession>, ServiceError> {
        let Some(user_id) = caller.user_id() else {
            return Ok(Vec::new());
        };
        let cap = Self::page_limit(feature);
        let limit = limit.map_or(cap, |l| l.clamp(1, cap));
        Ok(self.store.recent_sessions(user_id, feature, limit).await?)
    }

    pub async fn get(
        &self,
        caller: &Caller,
        id: &str,
    ) -> Result<Option<StudySession>, ServiceError> {
        let Some(user_id) = caller.user_id() else {
            return Ok(None);
        };
        Ok(self.store.get_session(user_id, id).await?)
    }

    /// True when a row was removed.
    pub async fn delete(&self, caller: &Caller, id: &str) -> Result<bool, ServiceError> {
        let Some(user_id) = caller.user_id() else {
            return Ok(false);
        };
        let deleted = self.store.delete_session(user_id, id).await?;
        tracing::info!(id, deleted, "study session delete");
        Ok(deleted)
    }
}
