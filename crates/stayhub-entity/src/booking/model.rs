//! Booking model and the shared overlap predicate.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A confirmed stay in a room for an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The booked room.
    pub room_id: Uuid,
    /// The guest who placed the booking.
    pub user_id: Uuid,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Last night of the stay (inclusive).
    pub check_out: NaiveDate,
    /// Number of guests, at least 1.
    pub guests: i16,
    /// Total cost, nightly rate times number of nights.
    pub total_cost: Decimal,
    /// When the booking was placed.
    pub created_at: DateTime<Utc>,
}

/// Data required to place a booking. The total cost is computed by the
/// booking workflow, not supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    /// The room to book.
    pub room_id: Uuid,
    /// The guest placing the booking.
    pub user_id: Uuid,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Last night of the stay (inclusive).
    pub check_out: NaiveDate,
    /// Number of guests, at least 1.
    pub guests: i16,
}

/// Whether two inclusive date ranges overlap.
///
/// Both endpoints count as occupied, so a stay ending on a given day
/// conflicts with another starting that same day. Single authority for
/// availability checks and in-transaction conflict detection.
pub fn ranges_conflict(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && a_end >= b_start
}
