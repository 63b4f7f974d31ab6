//! Staff-only handlers for owner upgrade requests.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use stayhub_entity::owner_request::OwnerRequest;

use crate::dto::request::OwnerRequestDecisionRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/owner-requests
pub async fn list_owner_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<OwnerRequest>>>, ApiError> {
    let requests = state.owner_request_admin.list_pending(&auth).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// POST /api/admin/owner-requests/approve
pub async fn approve_owner_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<OwnerRequestDecisionRequest>,
) -> Result<Json<ApiResponse<Vec<OwnerRequest>>>, ApiError> {
    let decided = state
        .owner_request_admin
        .approve(&auth, &req.request_ids)
        .await?;

    Ok(Json(ApiResponse::ok(decided)))
}

/// POST /api/admin/owner-requests/reject
pub async fn reject_owner_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<OwnerRequestDecisionRequest>,
) -> Result<Json<ApiResponse<Vec<OwnerRequest>>>, ApiError> {
    let decided = state
        .owner_request_admin
        .reject(&auth, &req.request_ids)
        .await?;

    Ok(Json(ApiResponse::ok(decided)))
}
