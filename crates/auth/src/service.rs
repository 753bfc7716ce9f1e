use crate::error::{AuthError, Result};
use crate::session::SessionRegistry;
use booking_models::Session;
use chrono::{DateTime, Utc};
use std::fmt;

/// The single administrator identity, read from configuration.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login, logout and token checks for the administrator.
#[derive(Clone)]
pub struct AuthService {
    registry: SessionRegistry,
    credentials: AdminCredentials,
}

impl AuthService {
    pub fn new(registry: SessionRegistry, credentials: AdminCredentials) -> Self {
        Self {
            registry,
            credentials,
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Compare against the configured credentials and open a session.
    ///
    /// A failed attempt touches nothing but the log.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        if !self.credentials.matches(username, password) {
            tracing::warn!(username = %username, "Failed login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let session = self.registry.issue().await;
        tracing::info!(expires_at = %session.expires_at, "Administrator logged in");
        Ok(session)
    }

    /// Revoke the token if one was given. Always succeeds.
    pub async fn logout(&self, token: Option<&str>) {
        if let Some(token) = token {
            if self.registry.revoke(token).await {
                tracing::debug!("Session revoked");
            }
        }
    }

    /// Validate a bearer token, sliding its expiry on success.
    pub async fn authenticate(&self, token: &str) -> Result<DateTime<Utc>> {
        self.registry.extend(token).await
    }
}
