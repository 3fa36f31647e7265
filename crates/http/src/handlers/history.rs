use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};

use crate::AppState;
use crate::api_error::ApiError;
use crate::caller::CallerIdentity;
use crate::query_types::HistoryQuery;
use crate::response_types::{DeleteResponse, HistoryEntry, SessionSummaryView};

pub async fn list_history(
    State(state): State<Arc<AppState>>,
    CallerIdentity(caller): CallerIdentity,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<SessionSummaryView>>, ApiError> {
    let Query(query) = query?;
    let feature = query.feature().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let sessions = state.history.recent(&caller, feature, query.limit).await?;
    Ok(Json(sessions.into_iter().map(SessionSummaryView::from).collect()))
}

pub async fn get_history_entry(
    State(state): State<Arc<AppState>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> Result<Json<HistoryEntry>, ApiError> {
    match state.history.get(&caller, &id).await? {
        Some(session) => Ok(Json(HistoryEntry::from(session))),
        None => Err(ApiError::NotFound(format!("study session '{id}' not found"))),
    }
}

pub async fn delete_history_entry(
    State(state): State<Arc<AppState>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.history.delete(&caller, &id).await?;
    Ok(Json(DeleteResponse { deleted, session_id: id }))
}
