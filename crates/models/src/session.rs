use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issued administrator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
