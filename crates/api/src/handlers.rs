pub mod auth;
pub mod bookings;
pub mod destinations;
pub mod health;
pub mod reviews;

use serde::{Deserialize, Serialize};

/// `{"message": ...}` acknowledgement body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
