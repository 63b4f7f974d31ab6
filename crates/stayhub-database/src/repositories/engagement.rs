//! Rating, like and favorite repository.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::engagement::{Favorite, HotelRating};

/// Repository for per-user engagement rows. Likes and favorites are
/// toggles; ratings are single-shot per (user, hotel).
#[derive(Debug, Clone)]
pub struct EngagementRepository {
    pool: PgPool,
}

impl EngagementRepository {
    /// Create a new engagement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a rating. A second rating from the same user on the same
    /// hotel is a conflict.
    pub async fn rate(&self, hotel_id: Uuid, user_id: Uuid, rating: i16) -> AppResult<HotelRating> {
        sqlx::query_as::<_, HotelRating>(
            "INSERT INTO hotel_ratings (hotel_id, user_id, rating) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(hotel_id)
        .bind(user_id)
        .bind(rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("hotel_ratings_hotel_id_user_id_key") =>
            {
                AppError::conflict("You have already rated this hotel".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create rating", e),
        })
    }

    /// Toggle a like. Returns `true` when the like is now on.
    ///
    /// Delete first; if nothing was deleted, insert. The insert uses
    /// ON CONFLICT DO NOTHING so a racing duplicate degrades to a
    /// no-op instead of an error.
    pub async fn toggle_like(&self, hotel_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let deleted = sqlx::query("DELETE FROM likes WHERE hotel_id = $1 AND user_id = $2")
            .bind(hotel_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle like", e))?;

        if deleted.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO likes (hotel_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (hotel_id, user_id) DO NOTHING",
        )
        .bind(hotel_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle like", e))?;

        Ok(true)
    }

    /// Toggle a favorite. Returns `true` when the favorite is now on.
    pub async fn toggle_favorite(&self, hotel_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let deleted = sqlx::query("DELETE FROM favorites WHERE hotel_id = $1 AND user_id = $2")
            .bind(hotel_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to toggle favorite", e)
            })?;

        if deleted.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO favorites (hotel_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (hotel_id, user_id) DO NOTHING",
        )
        .bind(hotel_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle favorite", e))?;

        Ok(true)
    }

    /// Number of likes on a hotel.
    pub async fn count_likes(&self, hotel_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE hotel_id = $1")
            .bind(hotel_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count likes", e))
    }

    /// Number of favorites on a hotel.
    pub async fn count_favorites(&self, hotel_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE hotel_id = $1")
            .bind(hotel_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count favorites", e))
    }

    /// List a user's favorites, newest first.
    pub async fn find_favorites_by_user(&self, user_id: Uuid) -> AppResult<Vec<Favorite>> {
        sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list favorites", e))
    }
}
