//! Review operations. Authors manage their own reviews; staff can
//! manage any.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_auth::policy::{self, Capability};
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::{HotelRepository, ReviewRepository};
use stayhub_entity::review::{CreateReview, Review};

use crate::context::RequestContext;

/// Handles hotel review CRUD.
#[derive(Debug, Clone)]
pub struct ReviewService {
    reviews: Arc<ReviewRepository>,
    hotels: Arc<HotelRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(reviews: Arc<ReviewRepository>, hotels: Arc<HotelRepository>) -> Self {
        Self { reviews, hotels }
    }

    /// List a hotel's reviews. Public.
    pub async fn list_reviews(&self, hotel_id: Uuid) -> AppResult<Vec<Review>> {
        self.hotels
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {hotel_id} not found")))?;
        self.reviews.find_by_hotel(hotel_id).await
    }

    /// Leave a review on a hotel. Unlike ratings, repeat reviews from
    /// the same user are allowed.
    pub async fn create_review(
        &self,
        ctx: &RequestContext,
        hotel_id: Uuid,
        comment: String,
    ) -> AppResult<Review> {
        if comment.trim().is_empty() {
            return Err(AppError::validation("Review comment cannot be empty"));
        }
        self.hotels
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {hotel_id} not found")))?;

        let review = self
            .reviews
            .create(&CreateReview {
                hotel_id,
                user_id: ctx.user_id,
                author: ctx.email.clone(),
                comment,
            })
            .await?;

        info!(review_id = %review.id, hotel_id = %hotel_id, "Review created");
        Ok(review)
    }

    /// Edit a review, author or staff only.
    pub async fn update_review(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        comment: String,
    ) -> AppResult<Review> {
        if comment.trim().is_empty() {
            return Err(AppError::validation("Review comment cannot be empty"));
        }
        let review = self.find_review(id).await?;
        policy::authorize(
            ctx.actor(),
            Capability::ManageReview,
            review.user_id == ctx.user_id,
        )?;

        let updated = self.reviews.update(id, &comment).await?;
        info!(review_id = %id, "Review updated");
        Ok(updated)
    }

    /// Delete a review, author or staff only.
    pub async fn delete_review(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let review = self.find_review(id).await?;
        policy::authorize(
            ctx.actor(),
            Capability::ManageReview,
            review.user_id == ctx.user_id,
        )?;

        self.reviews.delete(id).await?;
        info!(review_id = %id, "Review deleted");
        Ok(())
    }

    async fn find_review(&self, id: Uuid) -> AppResult<Review> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))
    }
}
