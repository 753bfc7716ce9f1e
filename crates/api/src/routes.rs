use crate::handlers;
use crate::middleware;
use crate::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Session endpoints
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
        .route(
            "/api/verify",
            get(handlers::auth::verify)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_session))
        )
        // Bookings: anyone can book, only the administrator reads or deletes
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route(
            "/api/bookings",
            get(handlers::bookings::list_bookings)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_auth))
        )
        .route(
            "/api/bookings/:id",
            delete(handlers::bookings::delete_booking)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_auth))
        )
        // Destinations: public reads, administrator writes
        .route("/api/destinations", get(handlers::destinations::list_destinations))
        .route(
            "/api/destinations",
            post(handlers::destinations::create_destination)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_auth))
        )
        .route(
            "/api/destinations/:id",
            put(handlers::destinations::update_destination)
                .delete(handlers::destinations::delete_destination)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_auth))
        )
        // Reviews: public reads, administrator writes
        .route("/api/reviews", get(handlers::reviews::list_reviews))
        .route(
            "/api/reviews",
            post(handlers::reviews::create_review)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_auth))
        )
        .route(
            "/api/reviews/:id",
            put(handlers::reviews::update_review)
                .delete(handlers::reviews::delete_review)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_auth))
        )
        .with_state(state)
}
