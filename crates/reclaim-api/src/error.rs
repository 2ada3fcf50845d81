//! API error taxonomy and its mapping onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use reclaim_store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (400).
    #[error("{0}")]
    Validation(String),

    /// No valid session (401).
    #[error("Authentication required")]
    Unauthorized,

    /// Bad login. Deliberately non-specific: the message never reveals
    /// whether the identifier or the password was wrong (401).
    #[error("Invalid matric number/email or password")]
    InvalidCredentials,

    /// Unknown id (404).
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Matric number already registered")]
    DuplicateMatric,

    /// The caller does not own the report being mutated (403).
    #[error("You can only modify your own reports")]
    Forbidden,

    /// Unexpected failure; details are logged, never sent to the client.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::DuplicateEmail | ApiError::DuplicateMatric => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref err) = self {
            error!("internal error: {:#}", err);
        }
        let status = self.status();
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ApiError::NotFound(what),
            StoreError::Validation(message) => ApiError::Validation(message),
            StoreError::DuplicateEmail => ApiError::DuplicateEmail,
            StoreError::DuplicateMatric => ApiError::DuplicateMatric,
            StoreError::Forbidden => ApiError::Forbidden,
        }
    }
}
