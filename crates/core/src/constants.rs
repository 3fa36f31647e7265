//! Shared constants for studymate.

/// Page size for the unfiltered history view.
pub const HISTORY_LIMIT: usize = 50;

/// Page size for history scoped to a single feature.
pub const FEATURE_HISTORY_LIMIT: usize = 20;

/// Number of quiz questions requested when the caller does not say.
pub const DEFAULT_QUESTION_COUNT: u8 = 5;

/// Upper bound on quiz questions per request.
pub const MAX_QUESTION_COUNT: u8 = 20;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
