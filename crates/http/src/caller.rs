//! Caller identity taken from the fronting auth proxy.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use studymate_service::Caller;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor wrapping [`Caller`]. A missing, blank or non-UTF-8 header is anonymous.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub Caller);

impl<S: Send + Sync> FromRequestParts<S> for CallerIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        Ok(Self(Caller::from_optional(user_id)))
    }
}
