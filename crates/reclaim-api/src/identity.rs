//! Session-cookie authentication for protected handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use uuid::Uuid;

use reclaim_auth::session::SESSION_COOKIE;

use crate::{AppState, error::ApiError};

/// The authenticated caller, resolved from the session cookie. Using this as
/// a handler argument is what gates a route: extraction happens before the
/// handler body runs, so an unauthenticated request is rejected with 401
/// before any store access.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).ok_or(ApiError::Unauthorized)?;
        let user_id = state
            .sessions
            .resolve(token.value(), Utc::now())
            .ok_or(ApiError::Unauthorized)?;
        Ok(Identity { user_id })
    }
}
