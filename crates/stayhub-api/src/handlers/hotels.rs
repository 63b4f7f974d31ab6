//! Hotel handlers — CRUD, listings, ranking, and engagement toggles.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::error::ApiError;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::hotel::HotelWithStats;
use stayhub_entity::engagement::{Favorite, HotelRating};
use stayhub_entity::hotel::{Hotel, UpdateHotel};
use stayhub_service::hotel::service::HotelInput;

use crate::dto::request::{HotelCreateRequest, HotelListQuery, HotelUpdateRequest, RateRequest};
use crate::dto::response::{ApiResponse, MessageResponse, ToggleResponse};
use crate::dto::validate_body;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/hotels
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Hotel>>>, ApiError> {
    let page = PageRequest::new(
        query.page.unwrap_or(1),
        query.page_size.unwrap_or_else(|| PageRequest::default().page_size),
    );

    let hotels = state
        .hotel_service
        .list_hotels(&page, query.stars, query.search.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(hotels)))
}

/// POST /api/hotels
pub async fn create_hotel(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<HotelCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Hotel>>), ApiError> {
    validate_body(&req)?;
    let hotel = state
        .hotel_service
        .create_hotel(
            &auth,
            HotelInput {
                name: req.name,
                address: req.address,
                description: req.description,
                stars: req.stars,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(hotel))))
}

/// GET /api/hotels/{id}
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<HotelWithStats>>, ApiError> {
    let hotel = state.hotel_service.get_hotel(id).await?;
    Ok(Json(ApiResponse::ok(hotel)))
}

/// PUT /api/hotels/{id}
pub async fn update_hotel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<HotelUpdateRequest>,
) -> Result<Json<ApiResponse<Hotel>>, ApiError> {
    let hotel = state
        .hotel_service
        .update_hotel(
            &auth,
            id,
            UpdateHotel {
                name: req.name,
                address: req.address,
                description: req.description,
                stars: req.stars,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(hotel)))
}

/// DELETE /api/hotels/{id}
pub async fn delete_hotel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.hotel_service.delete_hotel(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Hotel deleted"))))
}

/// GET /api/hotels/mine
pub async fn my_hotels(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Hotel>>>, ApiError> {
    let hotels = state.hotel_service.list_my_hotels(&auth).await?;
    Ok(Json(ApiResponse::ok(hotels)))
}

/// GET /api/top-hotels
pub async fn top_hotels(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<HotelWithStats>>>, ApiError> {
    let hotels = state.hotel_service.top_hotels().await?;
    Ok(Json(ApiResponse::ok(hotels)))
}

/// POST /api/hotels/{id}/rate
pub async fn rate_hotel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HotelRating>>), ApiError> {
    validate_body(&req)?;
    let rating = state.engagement_service.rate_hotel(&auth, id, req.rate).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(rating))))
}

/// POST /api/hotels/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ToggleResponse>>, ApiError> {
    let outcome = state.engagement_service.toggle_like(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ToggleResponse {
        active: outcome.active,
        count: outcome.count,
    })))
}

/// POST /api/hotels/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ToggleResponse>>, ApiError> {
    let outcome = state.engagement_service.toggle_favorite(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ToggleResponse {
        active: outcome.active,
        count: outcome.count,
    })))
}

/// GET /api/favorites
pub async fn my_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Favorite>>>, ApiError> {
    let favorites = state.engagement_service.list_my_favorites(&auth).await?;
    Ok(Json(ApiResponse::ok(favorites)))
}
