use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::api_error::ApiError;
use crate::caller::CallerIdentity;
use crate::query_types::StudyBody;
use crate::response_types::StudyResponseBody;

pub async fn submit(
    State(state): State<Arc<AppState>>,
    CallerIdentity(caller): CallerIdentity,
    body: Result<Json<StudyBody>, JsonRejection>,
) -> Result<Json<StudyResponseBody>, ApiError> {
    let Json(body) = body?;
    let request = body.into_request().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let response = state.study.submit(&caller, request).await?;
    let body = StudyResponseBody::from_response(response).map_err(anyhow::Error::from)?;
    Ok(Json(body))
}
