// Booking API
// HTTP surface for bookings, destinations and reviews

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;

use booking_auth::AuthService;
use booking_database::{DocumentStore, Repositories};
use std::sync::Arc;

pub struct AppState {
    pub auth_service: AuthService,
    pub repositories: Repositories,
    pub store: Arc<dyn DocumentStore>,
    /// When false, administrative routes are open (`/api/verify` still checks)
    pub auth_enabled: bool,
}

impl AppState {
    pub fn new(auth_service: AuthService, store: Arc<dyn DocumentStore>, auth_enabled: bool) -> Self {
        Self {
            auth_service,
            repositories: Repositories::new(store.clone()),
            store,
            auth_enabled,
        }
    }
}
