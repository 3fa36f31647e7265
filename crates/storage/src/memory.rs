//! Process-local backend. Contents are lost on restart.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use studymate_core::{FeatureType, NewStudySession, StudySession};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::StudySessionStore;

#[derive(Debug, Clone)]
struct StoredSession {
    user_id: String,
    session: StudySession,
}

/// In-memory store kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    rows: Arc<RwLock<Vec<StoredSession>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows across all users.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl StudySessionStore for MemoryStorage {
    async fn insert_session(
        &self,
        user_id: &str,
        session: &NewStudySession,
    ) -> Result<StudySession, StorageError> {
        let stored = StudySession {
            id: uuid::Uuid::new_v4().to_string(),
            feature_type: session.feature_type,
            subject: session.subject.clone(),
            input_text: session.input_text.clone(),
            output_text: session.output_text.clone(),
            created_at: Utc::now(),
        };
        self.rows
            .write()
            .await
            .push(StoredSession { user_id: user_id.to_owned(), session: stored.clone() });
        Ok(stored)
    }

    async fn recent_sessions(
        &self,
        user_id: &str,
        feature: Option<FeatureType>,
        limit: usize,
    ) -> Result<Vec<StudySession>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .filter(|r| feature.is_none_or(|f| r.session.feature_type == f))
            .take(limit)
            .map(|r| r.session.clone())
            .collect())
    }

    async fn get_session(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<StudySession>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|r| r.user_id == user_id && r.session.id == id)
            .map(|r| r.session.clone()))
    }

    async fn delete_session(&self, user_id: &str, id: &str) -> Result<bool, StorageError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| !(r.user_id == user_id && r.session.id == id));
        Ok(rows.len() < before)
    }
}
