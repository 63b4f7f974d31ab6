//! Review handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::error::ApiError;
use stayhub_entity::review::Review;

use crate::dto::request::ReviewRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate_body;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/hotels/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Review>>>, ApiError> {
    let reviews = state.review_service.list_reviews(hotel_id).await?;
    Ok(Json(ApiResponse::ok(reviews)))
}

/// POST /api/hotels/{id}/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(hotel_id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Review>>), ApiError> {
    validate_body(&req)?;
    let review = state
        .review_service
        .create_review(&auth, hotel_id, req.comment)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review))))
}

/// PUT /api/hotels/{id}/reviews/{review_id}
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((_hotel_id, review_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    validate_body(&req)?;
    let review = state
        .review_service
        .update_review(&auth, review_id, req.comment)
        .await?;

    Ok(Json(ApiResponse::ok(review)))
}

/// DELETE /api/hotels/{id}/reviews/{review_id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((_hotel_id, review_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.review_service.delete_review(&auth, review_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Review deleted"))))
}
