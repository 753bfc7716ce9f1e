use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::handlers::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use booking_models::{NewReview, Review, UpdateReview};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewCreated {
    pub message: String,
    #[serde(rename = "newReview")]
    pub new_review: Review,
}

pub async fn list_reviews(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Review>>, ApiError> {
    Ok(Json(state.repositories.reviews.list().await?))
}

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<NewReview>,
) -> Result<Json<ReviewCreated>, ApiError> {
    request.validate()?;

    let review = state.repositories.reviews.create(request).await?;

    Ok(Json(ReviewCreated {
        message: "Review added".to_string(),
        new_review: review,
    }))
}

pub async fn update_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateReview>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    if !state.repositories.reviews.update(&id, &request).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Review updated")))
}

pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.repositories.reviews.delete(&id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Review deleted")))
}
