//! Rating, like and favorite models.
//!
//! Each is unique per (user, hotel). Likes and favorites are pure toggles;
//! a rating carries a 1-5 score and is recorded once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A 1-5 numeric score a guest gave a hotel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HotelRating {
    /// Unique rating identifier.
    pub id: Uuid,
    /// The rated hotel.
    pub hotel_id: Uuid,
    /// The rating user.
    pub user_id: Uuid,
    /// Score, 1 to 5.
    pub rating: i16,
    /// When the rating was created.
    pub created_at: DateTime<Utc>,
}

/// A favorite toggle on a hotel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    /// Unique favorite identifier.
    pub id: Uuid,
    /// The favorited hotel.
    pub hotel_id: Uuid,
    /// The favoriting user.
    pub user_id: Uuid,
    /// When the favorite was created.
    pub created_at: DateTime<Utc>,
}
