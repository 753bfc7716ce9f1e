// Booking API Server
// Main entry point for the booking REST API

use anyhow::Context;
use booking_api::{config::Config, routes, AppState};
use booking_auth::{spawn_sweeper, AuthService, SessionRegistry};
use booking_database::{open_store, StoreConfig};
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,booking_api=debug,tower_http=debug".into()),
        )
        .init();

    tracing::info!("🚀 Starting Booking API Server");
    tracing::info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!("🔌 Server: {}:{}", config.server_host, config.server_port);
    tracing::info!(
        "🔐 Admin auth: {}",
        if config.auth_enabled { "enforced" } else { "disabled" }
    );

    // Open the store; refuse to serve without one
    match &config.store {
        StoreConfig::File { path } => tracing::info!("🗄️  Using JSON file store at {}", path.display()),
        StoreConfig::Postgres(_) => tracing::info!("🗄️  Connecting to Postgres document store..."),
    }
    let store = open_store(config.store.clone())
        .await
        .context("Failed to open store")?;
    tracing::info!("✅ Store ready ({})", store.backend());

    // Sessions and the hourly sweep
    let registry = SessionRegistry::new(config.session_ttl);
    let sweeper = spawn_sweeper(registry.clone(), config.sweep_interval);
    tracing::info!(
        "🔑 Sessions: {}h sliding expiry, sweep every {}s",
        config.session_ttl.num_hours(),
        config.sweep_interval.as_secs()
    );

    let auth_service = AuthService::new(registry, config.admin.clone());
    let state = Arc::new(AppState::new(auth_service, store, config.auth_enabled));

    // Create router
    let mut app = routes::create_router(state);
    if let Some(dir) = &config.static_dir {
        tracing::info!("📁 Serving static files from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }
    let app = app
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("✅ Server ready at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    sweeper.abort();
    tracing::info!("👋 Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
