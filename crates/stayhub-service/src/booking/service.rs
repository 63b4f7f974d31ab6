//! The booking workflow.
//!
//! Everything between the room lock and the commit happens in one
//! transaction: the overlap check, the booking insert, the room status
//! flip, the hotel counter increment, and the confirmation job row.
//! A failure at any step rolls the whole attempt back.

use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_database::repositories::{
    BookingRepository, HotelRepository, JobRepository, RoomRepository,
};
use stayhub_entity::booking::{Booking, NewBooking};
use stayhub_entity::job::{BookingConfirmationPayload, JOB_BOOKING_CONFIRMATION, NewJob};
use stayhub_entity::room::RoomStatus;

use crate::booking::availability::AvailabilityChecker;
use crate::context::RequestContext;

/// Caller-supplied part of a booking.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BookingRequest {
    /// First night of the stay.
    pub check_in: chrono::NaiveDate,
    /// Checkout day.
    pub check_out: chrono::NaiveDate,
    /// Number of guests, at least 1.
    pub guests: i16,
}

/// Orchestrates booking creation and booking queries.
#[derive(Debug, Clone)]
pub struct BookingService {
    pool: PgPool,
    rooms: Arc<RoomRepository>,
    bookings: Arc<BookingRepository>,
    hotels: Arc<HotelRepository>,
    jobs: Arc<JobRepository>,
    checker: AvailabilityChecker,
    job_max_attempts: i32,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        pool: PgPool,
        rooms: Arc<RoomRepository>,
        bookings: Arc<BookingRepository>,
        hotels: Arc<HotelRepository>,
        jobs: Arc<JobRepository>,
        job_max_attempts: i32,
    ) -> Self {
        let checker = AvailabilityChecker::new(Arc::clone(&bookings));
        Self {
            pool,
            rooms,
            bookings,
            hotels,
            jobs,
            checker,
            job_max_attempts,
        }
    }

    /// Whether a room is free for a date range, without booking it.
    ///
    /// Advisory only: the authoritative check re-runs under the room
    /// lock inside [`Self::create_booking`].
    pub async fn check_availability(
        &self,
        room_id: Uuid,
        check_in: chrono::NaiveDate,
        check_out: chrono::NaiveDate,
    ) -> AppResult<bool> {
        self.rooms
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {room_id} not found")))?;
        self.checker.is_available(room_id, check_in, check_out).await
    }

    /// Place a booking for the authenticated user.
    pub async fn create_booking(
        &self,
        ctx: &RequestContext,
        room_id: Uuid,
        request: BookingRequest,
    ) -> AppResult<Booking> {
        if request.guests < 1 {
            return Err(AppError::validation("At least one guest is required"));
        }
        if request.check_in >= request.check_out {
            return Err(AppError::validation("check_in must be before check_out"));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // The lock serializes concurrent attempts on the same room, so
        // the overlap check below sees every committed booking.
        let room = self
            .rooms
            .lock_for_update(tx.as_mut(), room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {room_id} not found")))?;

        let conflict = self
            .bookings
            .overlap_exists(tx.as_mut(), room_id, request.check_in, request.check_out)
            .await?;
        if conflict {
            return Err(AppError::conflict(
                "Room is not available for the requested dates",
            ));
        }

        let nights = (request.check_out - request.check_in).num_days();
        let total_cost = room.price_per_night * Decimal::from(nights);

        let data = NewBooking {
            room_id,
            user_id: ctx.user_id,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
        };
        let booking = self.bookings.create(tx.as_mut(), &data, total_cost).await?;

        self.rooms
            .set_status(tx.as_mut(), room_id, RoomStatus::Booked)
            .await?;
        self.hotels
            .increment_bookings_count(tx.as_mut(), room.hotel_id)
            .await?;

        let hotel = self
            .hotels
            .find_by_id(room.hotel_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {} not found", room.hotel_id)))?;

        let payload = BookingConfirmationPayload {
            booking_id: booking.id,
            recipient: ctx.email.clone(),
            hotel_name: hotel.name.clone(),
            room_number: room.room_number.clone(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            total_cost: booking.total_cost,
        };
        self.jobs
            .enqueue_in_tx(
                tx.as_mut(),
                &NewJob {
                    job_type: JOB_BOOKING_CONFIRMATION.to_string(),
                    payload: serde_json::to_value(&payload)?,
                    max_attempts: self.job_max_attempts,
                },
            )
            .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit booking", e)
        })?;

        info!(
            booking_id = %booking.id,
            room_id = %room_id,
            user_id = %ctx.user_id,
            nights,
            total_cost = %booking.total_cost,
            "Booking created"
        );

        Ok(booking)
    }

    /// List the authenticated user's bookings.
    pub async fn list_my_bookings(&self, ctx: &RequestContext) -> AppResult<Vec<Booking>> {
        self.bookings.find_by_user(ctx.user_id).await
    }

    /// Fetch one booking, visible to its guest or staff only.
    pub async fn get_booking(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Booking> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;

        if booking.user_id != ctx.user_id && !ctx.is_staff {
            return Err(AppError::forbidden("This booking belongs to another user"));
        }
        Ok(booking)
    }
}
