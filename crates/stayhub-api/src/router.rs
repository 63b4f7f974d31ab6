//! Route definitions for the StayHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use stayhub_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(account_routes())
        .merge(hotel_routes())
        .merge(room_routes())
        .merge(booking_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Account endpoints: registration, activation, login, logout,
/// password flows, owner upgrade.
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account/registration", post(handlers::account::register))
        .route("/account/activation", post(handlers::account::activate))
        .route("/account/login", post(handlers::account::login))
        .route("/account/logout", post(handlers::account::logout))
        .route("/account/me", get(handlers::account::me))
        .route(
            "/account/change_password",
            post(handlers::account::change_password),
        )
        .route(
            "/account/password_reset",
            post(handlers::account::request_password_reset),
        )
        .route(
            "/account/password_reset/confirm",
            post(handlers::account::confirm_password_reset),
        )
        .route(
            "/account/owner",
            post(handlers::account::request_owner_upgrade),
        )
}

/// Hotel CRUD, ranking, engagement, and reviews.
fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(handlers::hotels::list_hotels))
        .route("/hotels", post(handlers::hotels::create_hotel))
        .route("/hotels/mine", get(handlers::hotels::my_hotels))
        .route("/hotels/{id}", get(handlers::hotels::get_hotel))
        .route("/hotels/{id}", put(handlers::hotels::update_hotel))
        .route("/hotels/{id}", delete(handlers::hotels::delete_hotel))
        .route("/hotels/{id}/rate", post(handlers::hotels::rate_hotel))
        .route("/hotels/{id}/like", post(handlers::hotels::toggle_like))
        .route(
            "/hotels/{id}/favorite",
            post(handlers::hotels::toggle_favorite),
        )
        .route("/hotels/{id}/reviews", get(handlers::reviews::list_reviews))
        .route(
            "/hotels/{id}/reviews",
            post(handlers::reviews::create_review),
        )
        .route(
            "/hotels/{id}/reviews/{review_id}",
            put(handlers::reviews::update_review),
        )
        .route(
            "/hotels/{id}/reviews/{review_id}",
            delete(handlers::reviews::delete_review),
        )
        .route("/top-hotels", get(handlers::hotels::top_hotels))
        .route("/favorites", get(handlers::hotels::my_favorites))
}

/// Room CRUD.
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::rooms::list_rooms))
        .route("/rooms", post(handlers::rooms::create_room))
        .route("/rooms/{id}", get(handlers::rooms::get_room))
        .route(
            "/rooms/{id}/availability",
            get(handlers::rooms::check_availability),
        )
        .route("/rooms/{id}", put(handlers::rooms::update_room))
        .route("/rooms/{id}", delete(handlers::rooms::delete_room))
}

/// Booking placement and queries.
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/bookings/{id}",
            get(handlers::bookings::get_booking).post(handlers::bookings::create_booking),
        )
}

/// Staff-only endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/owner-requests",
            get(handlers::admin::list_owner_requests),
        )
        .route(
            "/admin/owner-requests/approve",
            post(handlers::admin::approve_owner_requests),
        )
        .route(
            "/admin/owner-requests/reject",
            post(handlers::admin::reject_owner_requests),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
