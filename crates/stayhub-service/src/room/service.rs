//! Room CRUD, gated on ownership of the parent hotel.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_auth::policy::{self, Capability};
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::{HotelRepository, RoomRepository};
use stayhub_entity::room::{CreateRoom, Room, RoomType, UpdateRoom};

use crate::context::RequestContext;

/// Valid guest capacity range for a room.
const CAPACITY_RANGE: std::ops::RangeInclusive<i16> = 1..=3;

/// Handles room management under a hotel.
#[derive(Debug, Clone)]
pub struct RoomService {
    rooms: Arc<RoomRepository>,
    hotels: Arc<HotelRepository>,
}

/// Caller-supplied part of a room.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RoomInput {
    /// Human-facing room number.
    pub room_number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Maximum number of guests, 1 to 3.
    pub capacity: i16,
    /// Nightly rate.
    pub price_per_night: rust_decimal::Decimal,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(rooms: Arc<RoomRepository>, hotels: Arc<HotelRepository>) -> Self {
        Self { rooms, hotels }
    }

    /// List rooms, optionally scoped to one hotel. Public.
    pub async fn list_rooms(&self, hotel_id: Option<Uuid>) -> AppResult<Vec<Room>> {
        if let Some(hotel_id) = hotel_id {
            self.hotels
                .find_by_id(hotel_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Hotel {hotel_id} not found")))?;
        }
        self.rooms.find_all(hotel_id).await
    }

    /// Fetch one room. Public.
    pub async fn get_room(&self, id: Uuid) -> AppResult<Room> {
        self.rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    /// Add a room to a hotel the caller manages.
    pub async fn create_room(
        &self,
        ctx: &RequestContext,
        hotel_id: Uuid,
        input: RoomInput,
    ) -> AppResult<Room> {
        self.authorize_on_hotel(ctx, hotel_id).await?;
        validate_room_input(&input)?;

        let room = self
            .rooms
            .create(&CreateRoom {
                hotel_id,
                room_number: input.room_number,
                room_type: input.room_type,
                capacity: input.capacity,
                price_per_night: input.price_per_night,
            })
            .await?;

        info!(room_id = %room.id, hotel_id = %hotel_id, "Room created");
        Ok(room)
    }

    /// Update a room of a hotel the caller manages.
    pub async fn update_room(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateRoom,
    ) -> AppResult<Room> {
        let room = self.get_room(id).await?;
        self.authorize_on_hotel(ctx, room.hotel_id).await?;

        if let Some(capacity) = data.capacity {
            if !CAPACITY_RANGE.contains(&capacity) {
                return Err(AppError::validation("Capacity must be between 1 and 3"));
            }
        }
        if let Some(price) = data.price_per_night {
            if price.is_sign_negative() || price.is_zero() {
                return Err(AppError::validation("Price per night must be positive"));
            }
        }

        let updated = self.rooms.update(id, &data).await?;
        info!(room_id = %id, "Room updated");
        Ok(updated)
    }

    /// Delete a room of a hotel the caller manages.
    pub async fn delete_room(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let room = self.get_room(id).await?;
        self.authorize_on_hotel(ctx, room.hotel_id).await?;

        self.rooms.delete(id).await?;
        info!(room_id = %id, "Room deleted");
        Ok(())
    }

    async fn authorize_on_hotel(&self, ctx: &RequestContext, hotel_id: Uuid) -> AppResult<()> {
        let hotel = self
            .hotels
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {hotel_id} not found")))?;
        policy::authorize(
            ctx.actor(),
            Capability::ManageRoom,
            hotel.owner_id == ctx.user_id,
        )
    }
}

fn validate_room_input(input: &RoomInput) -> AppResult<()> {
    if input.room_number.trim().is_empty() {
        return Err(AppError::validation("Room number cannot be empty"));
    }
    if !CAPACITY_RANGE.contains(&input.capacity) {
        return Err(AppError::validation("Capacity must be between 1 and 3"));
    }
    if input.price_per_night.is_sign_negative() || input.price_per_night.is_zero() {
        return Err(AppError::validation("Price per night must be positive"));
    }
    Ok(())
}
