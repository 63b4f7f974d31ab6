//! Room entity model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::types::{RoomStatus, RoomType};

/// A bookable room belonging to a hotel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// The hotel this room belongs to.
    pub hotel_id: Uuid,
    /// Human-facing room number, e.g. `"101"`.
    pub room_number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Maximum number of guests, 1 to 3.
    pub capacity: i16,
    /// Nightly rate, exact two-decimal fixed point.
    pub price_per_night: Decimal,
    /// Booked/loose display hint (see [`RoomStatus`]).
    pub status: RoomStatus,
}

/// Data required to create a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// The hotel this room belongs to.
    pub hotel_id: Uuid,
    /// Human-facing room number.
    pub room_number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Maximum number of guests, 1 to 3.
    pub capacity: i16,
    /// Nightly rate.
    pub price_per_night: Decimal,
}

/// Data for updating an existing room. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoom {
    /// New room number.
    pub room_number: Option<String>,
    /// New room category.
    pub room_type: Option<RoomType>,
    /// New capacity, 1 to 3.
    pub capacity: Option<i16>,
    /// New nightly rate.
    pub price_per_night: Option<Decimal>,
}
