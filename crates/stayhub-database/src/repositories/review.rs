//! Review repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::review::{CreateReview, Review};

/// Repository for hotel reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a review by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find review by id", e)
            })
    }

    /// List a hotel's reviews, newest first.
    pub async fn find_by_hotel(&self, hotel_id: Uuid) -> AppResult<Vec<Review>> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE hotel_id = $1 ORDER BY created_at DESC",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hotel reviews", e))
    }

    /// Create a new review.
    pub async fn create(&self, data: &CreateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (hotel_id, user_id, author, comment) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.hotel_id)
        .bind(data.user_id)
        .bind(&data.author)
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create review", e))
    }

    /// Replace a review's body.
    pub async fn update(&self, id: Uuid, comment: &str) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET comment = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update review", e))?
        .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))
    }

    /// Delete a review.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete review", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
