//! Room handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::error::ApiError;
use stayhub_entity::room::{Room, UpdateRoom};
use stayhub_service::room::service::RoomInput;

use crate::dto::request::{AvailabilityQuery, RoomCreateRequest, RoomListQuery, RoomUpdateRequest};
use crate::dto::response::{ApiResponse, AvailabilityResponse, MessageResponse};
use crate::dto::validate_body;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomListQuery>,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    let rooms = state.room_service.list_rooms(query.hotel_id).await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RoomCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Room>>), ApiError> {
    validate_body(&req)?;
    let room = state
        .room_service
        .create_room(
            &auth,
            req.hotel_id,
            RoomInput {
                room_number: req.room_number,
                room_type: req.room_type,
                capacity: req.capacity,
                price_per_night: req.price_per_night,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(room))))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    let room = state.room_service.get_room(id).await?;
    Ok(Json(ApiResponse::ok(room)))
}

/// GET /api/rooms/{id}/availability
pub async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    let available = state
        .booking_service
        .check_availability(id, query.check_in, query.check_out)
        .await?;

    Ok(Json(ApiResponse::ok(AvailabilityResponse { available })))
}

/// PUT /api/rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RoomUpdateRequest>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    let room = state
        .room_service
        .update_room(
            &auth,
            id,
            UpdateRoom {
                room_number: req.room_number,
                room_type: req.room_type,
                capacity: req.capacity,
                price_per_night: req.price_per_night,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(room)))
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.room_service.delete_room(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Room deleted"))))
}
