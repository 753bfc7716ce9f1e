pub mod error;
pub mod service;
pub mod session;
pub mod sweeper;

pub use error::{AuthError, Result};
pub use service::{AdminCredentials, AuthService};
pub use session::{SessionRegistry, DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS};
pub use sweeper::{spawn_sweeper, DEFAULT_SWEEP_INTERVAL};
