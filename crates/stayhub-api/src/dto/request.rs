//! Request DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use stayhub_entity::room::RoomType;

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address, becomes the login identity.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plain-text password.
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

/// Account activation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateRequest {
    /// The code emailed at registration.
    pub code: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// The current password, for verification.
    pub current_password: String,
    /// The replacement password.
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub new_password: String,
}

/// Password reset initiation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    /// Email of the account to reset.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

/// Password reset confirmation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetConfirmRequest {
    /// The code emailed on reset initiation.
    pub code: String,
    /// The replacement password.
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub new_password: String,
}

/// Hotel creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HotelCreateRequest {
    /// Display name.
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub name: String,
    /// Street address.
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub address: String,
    /// Free-form description.
    pub description: String,
    /// Star rating, 1 to 5.
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub stars: i16,
}

/// Hotel update request. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelUpdateRequest {
    /// New display name.
    pub name: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New star rating, 1 to 5.
    pub stars: Option<i16>,
}

/// Rating request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RateRequest {
    /// Score, 1 to 5.
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rate: i16,
}

/// Review creation or edit request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    /// Review text.
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub comment: String,
}

/// Room creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomCreateRequest {
    /// The hotel this room belongs to.
    pub hotel_id: Uuid,
    /// Human-facing room number.
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub room_number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Maximum number of guests, 1 to 3.
    #[validate(range(min = 1, max = 3, message = "must be between 1 and 3"))]
    pub capacity: i16,
    /// Nightly rate.
    pub price_per_night: Decimal,
}

/// Room update request. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUpdateRequest {
    /// New room number.
    pub room_number: Option<String>,
    /// New room category.
    pub room_type: Option<RoomType>,
    /// New capacity.
    pub capacity: Option<i16>,
    /// New nightly rate.
    pub price_per_night: Option<Decimal>,
}

/// Booking creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreateRequest {
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Checkout day.
    pub check_out: NaiveDate,
    /// Number of guests, at least 1.
    pub guests: i16,
}

/// Owner upgrade application body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerUpgradeRequest {
    /// Why the applicant wants owner rights.
    #[serde(default)]
    pub message: String,
}

/// Bulk owner-request decision body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerRequestDecisionRequest {
    /// The requests to decide.
    pub request_ids: Vec<Uuid>,
}

/// Pagination and filter parameters for the hotel list.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelListQuery {
    /// Page number, 1-based.
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Only hotels with exactly this many stars.
    pub stars: Option<i16>,
    /// Case-insensitive substring match on name or address.
    pub search: Option<String>,
}

/// Filter parameters for the room list.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomListQuery {
    /// Only rooms of this hotel.
    pub hotel_id: Option<Uuid>,
}

/// Date range for an availability query.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    /// First night of the prospective stay.
    pub check_in: NaiveDate,
    /// Checkout day.
    pub check_out: NaiveDate,
}
