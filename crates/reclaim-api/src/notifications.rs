//! Notification handlers. The inbox is always the session user's own: the
//! recipient id is never taken from the client on reads, and only the
//! recipient can dismiss an entry.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use reclaim_types::api::CreateNotificationRequest;
use reclaim_types::models::Notification;

use crate::{AppState, error::ApiError, identity::Identity};

pub async fn list_notifications(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<Vec<Notification>> {
    Json(state.store.notifications_for(identity.user_id))
}

pub async fn create_notification(
    State(state): State<AppState>,
    _identity: Identity,
    payload: Result<Json<CreateNotificationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) =
        payload.map_err(|_| ApiError::Validation("Invalid notification data".to_string()))?;
    let notification = state.store.create_notification(req.user_id, &req.message)?;
    Ok((StatusCode::CREATED, Json(notification)))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_notification(id, identity.user_id)?;
    Ok(StatusCode::OK)
}
