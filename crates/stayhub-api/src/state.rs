//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use stayhub_auth::jwt::JwtDecoder;
use stayhub_auth::session::SessionManager;
use stayhub_core::config::AppConfig;
use stayhub_service::account::{AccountService, OwnerRequestAdminService};
use stayhub_service::booking::BookingService;
use stayhub_service::engagement::EngagementService;
use stayhub_service::hotel::HotelService;
use stayhub_service::review::ReviewService;
use stayhub_service::room::RoomService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,

    /// Account lifecycle service.
    pub account_service: Arc<AccountService>,
    /// Staff administration of owner upgrade requests.
    pub owner_request_admin: Arc<OwnerRequestAdminService>,
    /// Hotel management and listings.
    pub hotel_service: Arc<HotelService>,
    /// Room management.
    pub room_service: Arc<RoomService>,
    /// Booking workflow.
    pub booking_service: Arc<BookingService>,
    /// Ratings, likes and favorites.
    pub engagement_service: Arc<EngagementService>,
    /// Hotel reviews.
    pub review_service: Arc<ReviewService>,
}
