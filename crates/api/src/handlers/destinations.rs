use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::handlers::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use booking_models::{Destination, NewDestination, UpdateDestination};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
pub struct DestinationCreated {
    pub message: String,
    #[serde(rename = "newDest")]
    pub new_dest: Destination,
}

pub async fn list_destinations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Destination>>, ApiError> {
    Ok(Json(state.repositories.destinations.list().await?))
}

pub async fn create_destination(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<NewDestination>,
) -> Result<Json<DestinationCreated>, ApiError> {
    request.validate()?;

    let destination = state.repositories.destinations.create(request).await?;

    Ok(Json(DestinationCreated {
        message: "Destination added".to_string(),
        new_dest: destination,
    }))
}

pub async fn update_destination(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateDestination>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    if !state.repositories.destinations.update(&id, &request).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Destination updated")))
}

pub async fn delete_destination(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.repositories.destinations.delete(&id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Destination deleted")))
}
