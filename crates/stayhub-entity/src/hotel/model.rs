//! Hotel entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hotel listing owned by a user with owner rights.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    /// Unique hotel identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Free-form description.
    pub description: String,
    /// Star rating of the property itself, 1 to 5.
    pub stars: i16,
    /// Materialized count of bookings across this hotel's rooms.
    ///
    /// Maintained exclusively by an atomic SQL increment inside the
    /// booking transaction; never read-modify-written by the application.
    pub bookings_count: i32,
    /// When the hotel was created.
    pub created_at: DateTime<Utc>,
    /// When the hotel was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHotel {
    /// The owning user.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Free-form description.
    pub description: String,
    /// Star rating, 1 to 5.
    pub stars: i16,
}

/// Data for updating an existing hotel. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHotel {
    /// New display name.
    pub name: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New star rating, 1 to 5.
    pub stars: Option<i16>,
}
