//! REST surface of the lost-and-found portal: route table, session-derived
//! identity, and the error-to-response mapping.

pub mod auth;
pub mod error;
pub mod identity;
pub mod items;
pub mod notifications;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use reclaim_auth::session::SessionStore;
use reclaim_store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(store: Arc<Store>, sessions: Arc<SessionStore>) -> Self {
        Self { store, sessions }
    }
}

/// Build the API router. Item reads are public; every mutating route pulls an
/// [`identity::Identity`] out of the session cookie before it touches the
/// store, and answers 401 when there is none.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/user", get(auth::current_user).patch(auth::update_profile))
        .route("/api/items", get(items::list_items).post(items::create_item))
        .route(
            "/api/items/{id}",
            patch(items::update_item).delete(items::delete_item),
        )
        .route("/api/items/{id}/resolve", post(items::resolve_item))
        .route(
            "/api/notifications",
            get(notifications::list_notifications).post(notifications::create_notification),
        )
        .route(
            "/api/notifications/{id}",
            delete(notifications::delete_notification),
        )
        .with_state(state)
}
