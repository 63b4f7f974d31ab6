//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A free-text review a guest left on a hotel. Unlike ratings, a user
/// may leave any number of reviews on the same hotel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier.
    pub id: Uuid,
    /// The reviewed hotel.
    pub hotel_id: Uuid,
    /// The review author.
    pub user_id: Uuid,
    /// Author display name, captured at creation time.
    pub author: String,
    /// Review body.
    pub comment: String,
    /// When the review was created.
    pub created_at: DateTime<Utc>,
    /// When the review was last edited.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    /// The reviewed hotel.
    pub hotel_id: Uuid,
    /// The review author.
    pub user_id: Uuid,
    /// Author display name.
    pub author: String,
    /// Review body.
    pub comment: String,
}
