use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booking_auth::AuthError;
use booking_database::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Request-level failure, rendered as a status code and JSON body
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Auth(e) => (StatusCode::UNAUTHORIZED, ErrorResponse::new(e.code(), &e.to_string())),
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::new("not_found", "Not found")),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new("validation_error", msg)),
            ApiError::Body(rejection) => (
                rejection.status(),
                ErrorResponse::new("invalid_body", &rejection.body_text()),
            ),
            ApiError::Store(e) => {
                tracing::error!("Store failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("store_error", "Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
