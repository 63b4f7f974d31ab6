//! Room availability over a set of existing bookings.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::BookingRepository;
use stayhub_entity::booking::{Booking, ranges_conflict};

/// Pure range check: whether the requested stay avoids every existing
/// booking. Both endpoints count as occupied, so a stay ending on the
/// requested start day makes the room unavailable.
pub fn is_available(existing: &[Booking], check_in: NaiveDate, check_out: NaiveDate) -> bool {
    !existing
        .iter()
        .any(|b| ranges_conflict(b.check_in, b.check_out, check_in, check_out))
}

/// Answers availability queries against the booking table.
#[derive(Debug, Clone)]
pub struct AvailabilityChecker {
    bookings: Arc<BookingRepository>,
}

impl AvailabilityChecker {
    /// Creates a new availability checker.
    pub fn new(bookings: Arc<BookingRepository>) -> Self {
        Self { bookings }
    }

    /// Whether a room is free for the requested range.
    pub async fn is_available(
        &self,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<bool> {
        if check_in >= check_out {
            return Err(AppError::validation("check_in must be before check_out"));
        }
        let overlapping = self
            .bookings
            .find_overlapping(room_id, check_in, check_out)
            .await?;
        Ok(overlapping.is_empty())
    }
}
