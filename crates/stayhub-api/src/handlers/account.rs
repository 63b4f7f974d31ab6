//! Account handlers — registration, activation, login, logout, password
//! management, and owner upgrade requests.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::ApiError;
use stayhub_entity::owner_request::OwnerRequest;

use crate::dto::request::{
    ActivateRequest, ChangePasswordRequest, LoginRequest, OwnerUpgradeRequest,
    PasswordResetConfirmRequest, PasswordResetRequest, RegisterRequest,
};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::dto::validate_body;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/account/registration
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    validate_body(&req)?;
    let user = state
        .account_service
        .register(&req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(&user))),
    ))
}

/// POST /api/account/activation
pub async fn activate(
    State(state): State<AppState>,
    Json(req): Json<ActivateRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.account_service.activate(&req.code).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Account activated, you can now log in",
    ))))
}

/// POST /api/account/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let outcome = state
        .account_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: outcome.access_token,
        expires_at: outcome.expires_at,
        user: UserResponse::from(&outcome.user),
    })))
}

/// POST /api/account/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.account_service.logout(&auth).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Logged out successfully",
    ))))
}

/// GET /api/account/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// POST /api/account/change_password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_body(&req)?;
    state
        .account_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password changed",
    ))))
}

/// POST /api/account/password_reset
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_body(&req)?;
    state.account_service.request_password_reset(&req.email).await?;

    // Same response whether or not the email exists.
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "If the email is registered, a reset code has been sent",
    ))))
}

/// POST /api/account/password_reset/confirm
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetConfirmRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_body(&req)?;
    state
        .account_service
        .confirm_password_reset(&req.code, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password has been reset, please log in again",
    ))))
}

/// POST /api/account/owner
pub async fn request_owner_upgrade(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<OwnerUpgradeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OwnerRequest>>), ApiError> {
    let request = state
        .account_service
        .request_owner_upgrade(&auth, &req.message)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request))))
}
