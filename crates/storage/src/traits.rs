//! Storage trait abstraction.
//!
//! Every operation is scoped to the owning user: rows belonging to another
//! `user_id` are invisible to reads and untouched by deletes.

use async_trait::async_trait;
use studymate_core::{FeatureType, NewStudySession, StudySession};

use crate::error::StorageError;

/// Study session persistence.
#[async_trait]
pub trait StudySessionStore: Send + Sync {
    /// Insert a session, assigning its id and creation time.
    async fn insert_session(
        &self,
        user_id: &str,
        session: &NewStudySession,
    ) -> Result<StudySession, StorageError>;

    /// Most recent sessions first, optionally restricted to one feature.
    async fn recent_sessions(
        &self,
        user_id: &str,
        feature: Option<FeatureType>,
        limit: usize,
    ) -> Result<Vec<StudySession>, StorageError>;

    /// Get one session by id.
    async fn get_session(&self, user_id: &str, id: &str)
    -> Result<Option<StudySession>, StorageError>;

    /// Delete one session. Returns `true` if a row was deleted.
    async fn delete_session(&self, user_id: &str, id: &str) -> Result<bool, StorageError>;
}
