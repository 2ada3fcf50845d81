//! Registration, login, logout, and profile handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use reclaim_auth::password::{hash_password, verify_password};
use reclaim_auth::session::SESSION_COOKIE;
use reclaim_types::api::{LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile};

use crate::{AppState, error::ApiError, identity::Identity};

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) =
        payload.map_err(|_| ApiError::Validation("All fields are required".to_string()))?;
    if req.full_name.trim().is_empty()
        || req.matric_no.trim().is_empty()
        || req.gmail.trim().is_empty()
        || req.password.trim().is_empty()
    {
        return Err(ApiError::Validation("All fields are required".to_string()));
    }

    let digest = hash_password(&req.password)?;
    let user = state
        .store
        .create_user(&req.full_name, &req.matric_no, &req.gmail, &digest)?;

    let token = state.sessions.create(user.id);
    Ok((
        StatusCode::CREATED,
        jar.add(session_cookie(token)),
        Json(UserProfile::from(&user)),
    ))
}

/// The `matricNo` field doubles as the login identifier: it is resolved
/// against matric numbers first, then gmail addresses. Every failure mode
/// shares one generic message.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidCredentials)?;

    let user = state
        .store
        .get_user_by_matric(&req.matric_no)
        .or_else(|| state.store.get_user_by_gmail(&req.matric_no))
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.sessions.create(user.id);
    Ok((jar.add(session_cookie(token)), Json(UserProfile::from(&user))))
}

/// Idempotent: logging out without a session is still a 200.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());
    let jar = match token {
        Some(token) => {
            state.sessions.destroy(&token);
            jar.remove(removal_cookie())
        }
        None => jar,
    };
    (StatusCode::OK, jar)
}

pub async fn current_user(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<UserProfile>, ApiError> {
    let user = state
        .store
        .get_user(identity.user_id)
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(UserProfile::from(&user)))
}

pub async fn update_profile(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let Json(updates) =
        payload.map_err(|_| ApiError::Validation("Invalid profile data".to_string()))?;
    let user = state.store.update_user(identity.user_id, updates)?;
    Ok(Json(UserProfile::from(&user)))
}
