//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use studymate_core::{FeatureType, NewStudySession, StudySession};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::StudySessionStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => {
                <PgStorage as StudySessionStore>::$method(s, $($arg),*).await
            },
            StorageBackend::Memory(s) => {
                <MemoryStorage as StudySessionStore>::$method(s, $($arg),*).await
            },
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    /// PostgreSQL when a URL is configured, otherwise the in-memory store.
    pub async fn connect(database_url: Option<&str>) -> Result<Self, StorageError> {
        match database_url {
            Some(url) => Self::new_postgres(url).await,
            None => {
                tracing::warn!("DATABASE_URL not set, study history is kept in memory only");
                Ok(Self::new_memory())
            },
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl StudySessionStore for StorageBackend {
    async fn insert_session(
        &self,
        user_id: &str,
        session: &NewStudySession,
    ) -> Result<StudySession, StorageError> {
        dispatch!(self, insert_session(user_id, session))
    }

    async fn recent_sessions(
        &self,
        user_id: &str,
        feature: Option<FeatureType>,
        limit: usize,
    ) -> Result<Vec<StudySession>, StorageError> {
        dispatch!(self, recent_sessions(user_id, feature, limit))
    }

    async fn get_session(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<StudySession>, StorageError> {
        dispatch!(self, get_session(user_id, id))
    }

    async fn delete_session(&self, user_id: &str, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, delete_session(user_id, id))
    }
}
