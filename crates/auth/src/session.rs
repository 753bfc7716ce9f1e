//! In-memory session registry.
//!
//! Maps opaque bearer tokens to their expiry. Sessions live only in this
//! process: nothing is persisted and a restart logs everyone out.

use crate::error::{AuthError, Result};
use booking_models::Session;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Token entropy in bytes (256 bits, 64 hex chars)
pub const TOKEN_BYTES: usize = 32;

pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Upper bound accepted for a configured session TTL (one year)
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// Registry of live administrator sessions with sliding expiration.
///
/// Every successful [`extend`](Self::extend) pushes the expiry to
/// `now + ttl`; there is no absolute maximum lifetime, so a client that keeps
/// making requests stays signed in indefinitely. Expired entries are removed
/// lazily when looked up, or in bulk by [`sweep`](Self::sweep).
///
/// All operations go through one mutex, so concurrent extends and sweeps
/// are serialized. Clones share the same map.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Issue a new session token.
    pub async fn issue(&self) -> Session {
        self.issue_at(Utc::now()).await
    }

    pub async fn issue_at(&self, now: DateTime<Utc>) -> Session {
        let token = generate_token();
        let expires_at = self.expiry_from(now);

        self.sessions.lock().await.insert(token.clone(), expires_at);

        Session { token, expires_at }
    }

    /// Validate a token and slide its expiry forward.
    pub async fn extend(&self, token: &str) -> Result<DateTime<Utc>> {
        self.extend_at(token, Utc::now()).await
    }

    pub async fn extend_at(&self, token: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let mut sessions = self.sessions.lock().await;

        let Some(expires_at) = sessions.get(token).copied() else {
            return Err(AuthError::InvalidToken);
        };

        if expires_at <= now {
            sessions.remove(token);
            return Err(AuthError::TokenExpired);
        }

        let renewed = self.expiry_from(now);
        sessions.insert(token.to_string(), renewed);
        Ok(renewed)
    }

    /// Remove a token. Returns whether it was present; absent is not an error.
    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.lock().await.remove(token).is_some()
    }

    /// Drop every session that expired at or before `now`.
    pub async fn sweep(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, expires_at| *expires_at > now);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // Saturates instead of panicking when now + ttl leaves chrono's range
    fn expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }
}

/// Random hex token from the OS CSPRNG. Panics if the OS has no entropy.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_issue_token_shape() {
        let registry = SessionRegistry::default();
        let now = Utc::now();

        let session = registry.issue_at(now).await;

        assert_eq!(session.token.len(), TOKEN_BYTES * 2);
        assert!(session.token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(session.expires_at, now + Duration::hours(24));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_tokens_are_distinct() {
        let registry = SessionRegistry::default();
        let mut tokens = HashSet::new();
        for _ in 0..100 {
            assert!(tokens.insert(registry.issue().await.token));
        }
        assert_eq!(registry.len().await, 100);
    }

    #[tokio::test]
    async fn test_sliding_expiry_keeps_active_session_alive() {
        let registry = SessionRegistry::default();
        let mut now = Utc::now();
        let session = registry.issue_at(now).await;

        // Ten days of use, 23 hours apart
        for _ in 0..10 {
            now = now + Duration::hours(23);
            let renewed = registry.extend_at(&session.token, now).await.unwrap();
            assert_eq!(renewed, now + Duration::hours(24));
        }
        assert!(now > session.expires_at);
    }

    #[tokio::test]
    async fn test_idle_session_expires_and_is_removed() {
        let registry = SessionRegistry::default();
        let issued = Utc::now();
        let session = registry.issue_at(issued).await;

        let result = registry
            .extend_at(&session.token, issued + Duration::hours(24))
            .await;
        assert_eq!(result, Err(AuthError::TokenExpired));
        assert!(registry.is_empty().await);

        // Gone now, so a retry reports an unknown token
        let retry = registry
            .extend_at(&session.token, issued + Duration::hours(1))
            .await;
        assert_eq!(retry, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_extend_unknown_token() {
        let registry = SessionRegistry::default();
        assert_eq!(registry.extend("not-a-token").await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let registry = SessionRegistry::default();
        let session = registry.issue().await;
        let other = registry.issue().await;

        assert!(registry.revoke(&session.token).await);
        assert!(!registry.revoke(&session.token).await);
        assert!(!registry.revoke("never-issued").await);

        assert_eq!(registry.extend(&session.token).await, Err(AuthError::InvalidToken));
        assert!(registry.extend(&other.token).await.is_ok());
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let registry = SessionRegistry::default();
        let now = Utc::now();

        let old = registry.issue_at(now - Duration::hours(30)).await;
        let boundary = registry.issue_at(now - Duration::hours(24)).await;
        let fresh = registry.issue_at(now - Duration::hours(1)).await;

        assert_eq!(registry.sweep(now).await, 2);
        assert_eq!(registry.len().await, 1);

        assert_eq!(registry.extend_at(&old.token, now).await, Err(AuthError::InvalidToken));
        assert_eq!(registry.extend_at(&boundary.token, now).await, Err(AuthError::InvalidToken));
        assert!(registry.extend_at(&fresh.token, now).await.is_ok());
    }

    #[tokio::test]
    async fn test_oversized_ttl_saturates_expiry() {
        let registry = SessionRegistry::new(Duration::days(100_000_000));
        let now = Utc::now();

        let session = registry.issue_at(now).await;
        assert_eq!(session.expires_at, DateTime::<Utc>::MAX_UTC);

        let renewed = registry.extend_at(&session.token, now).await.unwrap();
        assert_eq!(renewed, DateTime::<Utc>::MAX_UTC);
    }

    #[tokio::test]
    async fn test_concurrent_extends_and_sweeps() {
        let registry = SessionRegistry::default();
        let session = registry.issue().await;

        let mut handles = Vec::new();
        for i in 0..50 {
            let registry = registry.clone();
            let token = session.token.clone();
            handles.push(tokio::spawn(async move {
                if i % 5 == 0 {
                    registry.sweep(Utc::now()).await;
                } else {
                    registry.extend(&token).await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(registry.len().await, 1);
    }
}
