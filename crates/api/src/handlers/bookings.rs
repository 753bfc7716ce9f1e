use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::handlers::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use booking_models::{Booking, NewBooking};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingCreated {
    pub message: String,
    pub booking: Booking,
}

/// List bookings, newest first
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Booking>>, ApiError> {
    Ok(Json(state.repositories.bookings.list().await?))
}

/// Public booking form submission
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<NewBooking>,
) -> Result<Json<BookingCreated>, ApiError> {
    request.validate()?;

    let booking = state.repositories.bookings.create(request).await?;
    tracing::info!(booking_id = %booking.id, "Booking saved");

    Ok(Json(BookingCreated {
        message: "Booking saved successfully".to_string(),
        booking,
    }))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.repositories.bookings.delete(&id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Booking deleted")))
}
