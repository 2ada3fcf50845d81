//! Item report handlers. Listing is public; everything else requires a
//! session, and owned reports may only be changed by their reporter.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use reclaim_types::api::{CreateItemRequest, ResolveItemRequest, UpdateItemRequest};
use reclaim_types::models::Item;

use crate::{AppState, error::ApiError, identity::Identity};

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.items())
}

pub async fn create_item(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::Validation("Invalid item data".to_string()))?;
    let item = state.store.create_item(identity.user_id, req)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(updates) =
        payload.map_err(|_| ApiError::Validation("Invalid item data".to_string()))?;
    let item = state.store.update_item(id, identity.user_id, updates)?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_item(id, identity.user_id)?;
    Ok(StatusCode::OK)
}

pub async fn resolve_item(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    payload: Result<Json<ResolveItemRequest>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(req) =
        payload.map_err(|_| ApiError::Validation("Holder info is required".to_string()))?;
    let item = state
        .store
        .resolve_item(id, identity.user_id, &req.holder_info)?;
    Ok(Json(item))
}
