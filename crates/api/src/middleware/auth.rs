use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use booking_auth::AuthError;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Authenticated administrator context
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthScheme)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::InvalidAuthScheme)?;

    Ok(token.to_string())
}

/// Validate the bearer token and slide its expiry
async fn authorize(state: &AppState, headers: &HeaderMap, request: &mut Request) -> Result<(), ApiError> {
    let token = extract_bearer_token(headers)?;

    let expires_at = state.auth_service.authenticate(&token).await.map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(AdminSession { token, expires_at });
    Ok(())
}

/// Middleware guarding administrative routes. A no-op when auth is disabled.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if state.auth_enabled {
        authorize(&state, &headers, &mut request).await?;
    }

    Ok(next.run(request).await)
}

/// Middleware that always demands a valid session, whatever `auth_enabled` says
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    authorize(&state, &headers, &mut request).await?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc123")).unwrap(), "abc123");
        assert_eq!(extract_bearer_token(&HeaderMap::new()), Err(AuthError::MissingToken));
        assert_eq!(extract_bearer_token(&headers("Basic abc")), Err(AuthError::InvalidAuthScheme));
        assert_eq!(extract_bearer_token(&headers("Bearer ")), Err(AuthError::InvalidAuthScheme));
    }
}
