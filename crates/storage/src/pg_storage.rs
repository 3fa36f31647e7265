//! PostgreSQL storage backend using sqlx.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use studymate_core::{
    FeatureType, NewStudySession, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS, StudySession,
};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;
use crate::traits::StudySessionStore;

const SESSION_COLUMNS: &str = "id, feature_type, subject, input_text, output_text, created_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, then bring the schema up to date.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, running migrations on it.
    pub async fn from_pool(pool: PgPool) -> Result<Self, StorageError> {
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Convert `usize` to `i64` for SQL LIMIT binds, saturating on overflow.
fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

fn row_to_session(row: &PgRow) -> Result<StudySession, StorageError> {
    let feature: String = row.try_get("feature_type")?;
    let feature_type = feature.parse::<FeatureType>().map_err(|e| StorageError::DataCorruption {
        context: format!("feature_type '{feature}'"),
        source: Box::new(e),
    })?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(StudySession {
        id: row.try_get("id")?,
        feature_type,
        subject: row.try_get("subject")?,
        input_text: row.try_get("input_text")?,
        output_text: row.try_get("output_text")?,
        created_at,
    })
}

#[async_trait]
impl StudySessionStore for PgStorage {
    async fn insert_session(
        &self,
        user_id: &str,
        session: &NewStudySession,
    ) -> Result<StudySession, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            "INSERT INTO study_sessions (id, user_id, feature_type, subject, input_text, output_text)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(&id)
        .bind(user_id)
        .bind(session.feature_type.as_str())
        .bind(&session.subject)
        .bind(&session.input_text)
        .bind(&session.output_text)
        .fetch_one(&self.pool)
        .await?;
        row_to_session(&row)
    }

    async fn recent_sessions(
        &self,
        user_id: &str,
        feature: Option<FeatureType>,
        limit: usize,
    ) -> Result<Vec<StudySession>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM study_sessions
             WHERE user_id = $1 AND ($2::TEXT IS NULL OR feature_type = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3"
        ))
        .bind(user_id)
        .bind(feature.map(|f| f.as_str()))
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_session).collect()
    }

    async fn get_session(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<StudySession>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM study_sessions WHERE user_id = $1 AND id = $2"
        ))
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_session(&r)).transpose()
    }

    async fn delete_session(&self, user_id: &str, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM study_sessions WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
