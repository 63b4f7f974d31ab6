//! Rating, like and favorite operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::{EngagementRepository, HotelRepository};
use stayhub_entity::engagement::{Favorite, HotelRating};

use crate::context::RequestContext;

/// Result of a like or favorite toggle.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ToggleOutcome {
    /// Whether the toggle is now on for the caller.
    pub active: bool,
    /// Total count on the hotel after the toggle.
    pub count: i64,
}

/// Handles per-user engagement with hotels.
#[derive(Debug, Clone)]
pub struct EngagementService {
    engagement: Arc<EngagementRepository>,
    hotels: Arc<HotelRepository>,
}

impl EngagementService {
    /// Creates a new engagement service.
    pub fn new(engagement: Arc<EngagementRepository>, hotels: Arc<HotelRepository>) -> Self {
        Self { engagement, hotels }
    }

    /// Rate a hotel once; a repeat attempt is a conflict and leaves
    /// the original score untouched.
    pub async fn rate_hotel(
        &self,
        ctx: &RequestContext,
        hotel_id: Uuid,
        rating: i16,
    ) -> AppResult<HotelRating> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }
        self.ensure_hotel_exists(hotel_id).await?;

        let saved = self.engagement.rate(hotel_id, ctx.user_id, rating).await?;
        info!(hotel_id = %hotel_id, user_id = %ctx.user_id, rating, "Hotel rated");
        Ok(saved)
    }

    /// Toggle a like, reporting the new state and like total.
    pub async fn toggle_like(
        &self,
        ctx: &RequestContext,
        hotel_id: Uuid,
    ) -> AppResult<ToggleOutcome> {
        self.ensure_hotel_exists(hotel_id).await?;
        let active = self.engagement.toggle_like(hotel_id, ctx.user_id).await?;
        let count = self.engagement.count_likes(hotel_id).await?;
        info!(hotel_id = %hotel_id, user_id = %ctx.user_id, active, "Like toggled");
        Ok(ToggleOutcome { active, count })
    }

    /// Toggle a favorite, reporting the new state and favorite total.
    pub async fn toggle_favorite(
        &self,
        ctx: &RequestContext,
        hotel_id: Uuid,
    ) -> AppResult<ToggleOutcome> {
        self.ensure_hotel_exists(hotel_id).await?;
        let active = self
            .engagement
            .toggle_favorite(hotel_id, ctx.user_id)
            .await?;
        let count = self.engagement.count_favorites(hotel_id).await?;
        info!(hotel_id = %hotel_id, user_id = %ctx.user_id, active, "Favorite toggled");
        Ok(ToggleOutcome { active, count })
    }

    /// The authenticated user's favorites.
    pub async fn list_my_favorites(&self, ctx: &RequestContext) -> AppResult<Vec<Favorite>> {
        self.engagement.find_favorites_by_user(ctx.user_id).await
    }

    async fn ensure_hotel_exists(&self, hotel_id: Uuid) -> AppResult<()> {
        self.hotels
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {hotel_id} not found")))?;
        Ok(())
    }
}
