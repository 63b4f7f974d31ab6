//! Booking repository implementation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::booking::{Booking, NewBooking};

/// Repository for bookings. The overlap query and the insert both have
/// transaction-scoped variants so the booking workflow can run them
/// under one room lock.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    /// List a user's bookings, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user bookings", e))
    }

    /// Bookings for a room that overlap the given inclusive range.
    ///
    /// Uses the inclusive predicate `check_in <= $3 AND check_out >= $2`,
    /// so a stay ending on the requested start day counts as a conflict.
    pub async fn find_overlapping(
        &self,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings \
             WHERE room_id = $1 AND check_in <= $3 AND check_out >= $2 \
             ORDER BY check_in ASC",
        )
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query overlapping bookings", e)
        })
    }

    /// Transaction-scoped variant of [`Self::find_overlapping`], run
    /// while holding the room lock.
    pub async fn overlap_exists(
        &self,
        conn: &mut PgConnection,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM bookings \
             WHERE room_id = $1 AND check_in <= $3 AND check_out >= $2)",
        )
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check booking overlap", e)
        })?;
        Ok(exists)
    }

    /// Insert a booking inside the caller's transaction.
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        data: &NewBooking,
        total_cost: Decimal,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (room_id, user_id, check_in, check_out, guests, total_cost) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.room_id)
        .bind(data.user_id)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(data.guests)
        .bind(total_cost)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }
}
