//! Booking handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::error::ApiError;
use stayhub_entity::booking::Booking;
use stayhub_service::booking::BookingRequest;

use crate::dto::request::BookingCreateRequest;
use crate::dto::response::{ApiResponse, BookingCreatedResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/bookings/{id}
///
/// The path id is the room being booked.
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<Uuid>,
    Json(req): Json<BookingCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingCreatedResponse>>), ApiError> {
    let booking = state
        .booking_service
        .create_booking(
            &auth,
            room_id,
            BookingRequest {
                check_in: req.check_in,
                check_out: req.check_out,
                guests: req.guests,
            },
        )
        .await?;

    let message = format!(
        "Booking confirmed from {} to {}, total cost {}",
        booking.check_in, booking.check_out, booking.total_cost
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(BookingCreatedResponse { booking, message })),
    ))
}

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Booking>>>, ApiError> {
    let bookings = state.booking_service.list_my_bookings(&auth).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state.booking_service.get_booking(&auth, id).await?;
    Ok(Json(ApiResponse::ok(booking)))
}
