//! Owner upgrade request model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::OwnerRequestStatus;

/// A user's request to be promoted to hotel owner, decided by staff.
/// At most one request exists per user; re-applying after a rejection
/// resets the same row back to pending.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OwnerRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The requesting user.
    pub user_id: Uuid,
    /// Free-text motivation supplied by the applicant.
    pub message: String,
    /// Current decision state.
    pub status: OwnerRequestStatus,
    /// When the request was first submitted.
    pub created_at: DateTime<Utc>,
    /// When the request was last touched (re-application or decision).
    pub updated_at: DateTime<Utc>,
}
