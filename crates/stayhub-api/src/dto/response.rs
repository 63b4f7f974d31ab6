//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_entity::booking::Booking;
use stayhub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Owner flag.
    pub is_owner: bool,
    /// Staff flag.
    pub is_staff: bool,
    /// Activation flag.
    pub is_active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_owner: user.is_owner,
            is_staff: user.is_staff,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Result of a like or favorite toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    /// Whether the toggle is now on.
    pub active: bool,
    /// Total count on the hotel after the toggle.
    pub count: i64,
}

/// Result of an availability query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the room is free for the requested range.
    pub available: bool,
}

/// Response for a freshly placed booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    /// The stored booking.
    pub booking: Booking,
    /// Human-readable confirmation.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database status.
    pub database: String,
}
