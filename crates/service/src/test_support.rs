//! Test doubles for the completion client and the session store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use studymate_core::{FeatureType, NewStudySession, StudySession};
use studymate_llm::{Completion, LlmError};
use studymate_storage::{MemoryStorage, StorageError, StudySessionStore};
use tokio::sync::{Mutex, Notify};

pub(crate) fn new_session(feature: FeatureType) -> NewStudySession {
    NewStudySession {
        feature_type: feature,
        subject: None,
        input_text: format!("{feature} input"),
        output_text: format!("{feature} output"),
    }
}

/// Returns one scripted result for every call.
pub(crate) struct ScriptedCompletion {
    reply: Mutex<Option<LlmError>>,
    text: String,
    pub calls: AtomicUsize,
}

impl ScriptedCompletion {
    pub fn ok(text: &str) -> Self {
        Self { reply: Mutex::new(None), text: text.to_owned(), calls: AtomicUsize::new(0) }
    }

    /// Fails the first call with `err`, answers with an empty string afterwards.
    pub fn err(err: LlmError) -> Self {
        Self { reply: Mutex::new(Some(err)), text: String::new(), calls: AtomicUsize::new(0) }
    }
}

#[async_trait]
impl Completion for ScriptedCompletion {
    async fn complete(&self, _feature: FeatureType, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply.lock().await.take() {
            Some(err) => Err(err),
            None => Ok(self.text.clone()),
        }
    }
}

/// Holds any prompt containing "slow" until `release` is notified.
pub(crate) struct GatedCompletion {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[async_trait]
impl Completion for GatedCompletion {
    async fn complete(&self, _feature: FeatureType, prompt: &str) -> Result<String, LlmError> {
        if prompt.contains("slow") {
            self.started.notify_one();
            self.release.notified().await;
        }
        Ok(format!("answered: {}", prompt.len()))
    }
}

/// Memory store that counts calls and can be switched to fail.
#[derive(Default)]
pub(crate) struct RecordingStore {
    inner: MemoryStorage,
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    fn record(&self) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl StudySessionStore for RecordingStore {
    async fn insert_session(
        &self,
        user_id: &str,
        session: &NewStudySession,
    ) -> Result<StudySession, StorageError> {
        self.record()?;
        self.inner.insert_session(user_id, session).await
    }

    async fn recent_sessions(
        &self,
        user_id: &str,
        feature: Option<FeatureType>,
        limit: usize,
    ) -> Result<Vec<StudySession>, StorageError> {
        self.record()?;
        self.inner.recent_sessions(user_id, feature, limit).await
    }

    async fn get_session(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<StudySession>, StorageError> {
        self.record()?;
        self.inner.get_session(user_id, id).await
    }

    async fn delete_session(&self, user_id: &str, id: &str) -> Result<bool, StorageError> {
        self.record()?;
        self.inner.delete_session(user_id, id).await
    }
}
