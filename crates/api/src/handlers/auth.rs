use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::middleware::{extract_bearer_token, AdminSession};
use crate::AppState;
use axum::{extract::State, http::HeaderMap, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub success: bool,
    pub authenticated: bool,
    /// Expiry after the slide applied by this very request
    pub expires_at: DateTime<Utc>,
}

/// Administrator login
pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        token: session.token,
        message: "Login successful".to_string(),
    }))
}

/// Logout; succeeds with or without a valid token
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<LogoutResponse> {
    let token = extract_bearer_token(&headers).ok();
    state.auth_service.logout(token.as_deref()).await;

    Json(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    })
}

/// Reached only through the session middleware
pub async fn verify(Extension(session): Extension<AdminSession>) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        success: true,
        authenticated: true,
        expires_at: session.expires_at,
    })
}
