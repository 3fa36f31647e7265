//! PostgreSQL schema migrations for studymate storage.

use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent.
pub(crate) async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS study_sessions (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            feature_type TEXT NOT NULL,
            subject TEXT,
            input_text TEXT NOT NULL,
            output_text TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_study_sessions_user_created
         ON study_sessions (user_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_study_sessions_user_feature
         ON study_sessions (user_id, feature_type, created_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::debug!("study_sessions schema up to date");
    Ok(())
}
