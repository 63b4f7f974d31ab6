//! Hotel CRUD and listing operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_auth::policy::{self, Capability};
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::hotel::HotelWithStats;
use stayhub_database::repositories::HotelRepository;
use stayhub_entity::hotel::{CreateHotel, Hotel, UpdateHotel};

use crate::context::RequestContext;
use crate::hotel::ranking;

/// Handles hotel management and public listings.
#[derive(Debug, Clone)]
pub struct HotelService {
    hotels: Arc<HotelRepository>,
}

/// Caller-supplied part of a hotel.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HotelInput {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Free-form description.
    pub description: String,
    /// Star rating, 1 to 5.
    pub stars: i16,
}

impl HotelService {
    /// Creates a new hotel service.
    pub fn new(hotels: Arc<HotelRepository>) -> Self {
        Self { hotels }
    }

    /// List hotels, newest first, with optional star filter and text
    /// search. Public.
    pub async fn list_hotels(
        &self,
        page: &PageRequest,
        stars: Option<i16>,
        search: Option<&str>,
    ) -> AppResult<PageResponse<Hotel>> {
        if let Some(stars) = stars {
            if !(1..=5).contains(&stars) {
                return Err(AppError::validation("Stars must be between 1 and 5"));
            }
        }
        self.hotels.find_all(page, stars, search).await
    }

    /// Fetch one hotel with its engagement aggregates. Public.
    pub async fn get_hotel(&self, id: Uuid) -> AppResult<HotelWithStats> {
        self.hotels
            .find_with_stats(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))
    }

    /// The five most-booked hotels, rating as tie breaker. Public.
    pub async fn top_hotels(&self) -> AppResult<Vec<HotelWithStats>> {
        let all = self.hotels.find_all_with_stats().await?;
        Ok(ranking::top_hotels(all))
    }

    /// List the authenticated owner's hotels.
    pub async fn list_my_hotels(&self, ctx: &RequestContext) -> AppResult<Vec<Hotel>> {
        self.hotels.find_by_owner(ctx.user_id).await
    }

    /// Create a hotel, owner capability required.
    pub async fn create_hotel(&self, ctx: &RequestContext, input: HotelInput) -> AppResult<Hotel> {
        policy::authorize(ctx.actor(), Capability::CreateHotel, false)?;
        validate_hotel_input(&input)?;

        let hotel = self
            .hotels
            .create(&CreateHotel {
                owner_id: ctx.user_id,
                name: input.name,
                address: input.address,
                description: input.description,
                stars: input.stars,
            })
            .await?;

        info!(hotel_id = %hotel.id, owner_id = %ctx.user_id, "Hotel created");
        Ok(hotel)
    }

    /// Update a hotel, owning owner or staff only.
    pub async fn update_hotel(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateHotel,
    ) -> AppResult<Hotel> {
        let hotel = self
            .hotels
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))?;
        policy::authorize(
            ctx.actor(),
            Capability::ManageHotel,
            hotel.owner_id == ctx.user_id,
        )?;

        if let Some(stars) = data.stars {
            if !(1..=5).contains(&stars) {
                return Err(AppError::validation("Stars must be between 1 and 5"));
            }
        }

        let updated = self.hotels.update(id, &data).await?;
        info!(hotel_id = %id, "Hotel updated");
        Ok(updated)
    }

    /// Delete a hotel, owning owner or staff only.
    pub async fn delete_hotel(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let hotel = self
            .hotels
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))?;
        policy::authorize(
            ctx.actor(),
            Capability::ManageHotel,
            hotel.owner_id == ctx.user_id,
        )?;

        self.hotels.delete(id).await?;
        info!(hotel_id = %id, "Hotel deleted");
        Ok(())
    }
}

fn validate_hotel_input(input: &HotelInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::validation("Hotel name cannot be empty"));
    }
    if input.address.trim().is_empty() {
        return Err(AppError::validation("Hotel address cannot be empty"));
    }
    if !(1..=5).contains(&input.stars) {
        return Err(AppError::validation("Stars must be between 1 and 5"));
    }
    Ok(())
}
