//! HTTP API server for studymate.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod caller;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use studymate_service::{HistoryService, StudyService};
use tower_http::cors::CorsLayer;

pub use caller::{CallerIdentity, USER_ID_HEADER};
pub use query_types::{HistoryQuery, StudyBody};
pub use response_types::{
    DeleteResponse, HistoryEntry, SessionSummaryView, StudyResponseBody, VersionResponse,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Submit pipeline
    pub study: Arc<StudyService>,
    /// Per-user history reads and deletes
    pub history: Arc<HistoryService>,
}

impl AppState {
    #[must_use]
    pub fn new(study: Arc<StudyService>) -> Self {
        let history = Arc::clone(study.history());
        Self { study, history }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/study", post(handlers::study::submit))
        .route("/api/history", get(handlers::history::list_history))
        .route(
            "/api/history/{id}",
            get(handlers::history::get_history_entry)
                .delete(handlers::history::delete_history_entry),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
