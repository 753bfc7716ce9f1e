pub mod connection;
pub mod document;
pub mod error;
pub mod file;
pub mod ids;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use connection::{Database, DatabaseConfig};
pub use document::{Collection, Document};
pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use ids::IdGenerator;
pub use postgres::PgDocumentStore;
pub use repositories::{BookingRepository, DestinationRepository, Repositories, ReviewRepository};
pub use store::DocumentStore;

use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_DATA_FILE: &str = "data/bookings.json";

/// Which backend holds the data.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    File { path: PathBuf },
    Postgres(DatabaseConfig),
}

impl StoreConfig {
    /// `STORE_BACKEND` selects `file` (default) or `postgres`.
    pub fn from_env() -> Result<Self> {
        let backend = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "file".to_string());

        match backend.to_ascii_lowercase().as_str() {
            "file" | "json" => Ok(StoreConfig::File {
                path: std::env::var("DATA_FILE")
                    .unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string())
                    .into(),
            }),
            "postgres" | "postgresql" => Ok(StoreConfig::Postgres(DatabaseConfig::from_env())),
            other => Err(StoreError::Configuration(format!(
                "Unknown STORE_BACKEND '{}', expected 'file' or 'postgres'",
                other
            ))),
        }
    }
}

/// Open the configured backend and check it is usable.
pub async fn open_store(config: StoreConfig) -> Result<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config {
        StoreConfig::File { path } => Arc::new(JsonFileStore::new(path)),
        StoreConfig::Postgres(db_config) => Arc::new(PgDocumentStore::connect(db_config).await?),
    };

    store.ping().await?;
    tracing::debug!(backend = store.backend(), "Store opened");
    Ok(store)
}
