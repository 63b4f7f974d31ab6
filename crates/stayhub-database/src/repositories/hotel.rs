//! Hotel repository implementation.

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::hotel::{CreateHotel, Hotel, UpdateHotel};

/// A hotel joined with its engagement aggregates, used for ranking
/// and detail views.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct HotelWithStats {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub hotel: Hotel,
    /// Average of this hotel's 1-5 ratings, `None` when unrated.
    pub avg_rating: Option<Decimal>,
    /// Number of ratings submitted.
    pub ratings_count: i64,
    /// Number of likes.
    pub likes_count: i64,
}

const STATS_QUERY: &str = "SELECT h.*, \
        AVG(hr.rating) AS avg_rating, \
        COUNT(DISTINCT hr.id) AS ratings_count, \
        COUNT(DISTINCT l.id) AS likes_count \
     FROM hotels h \
     LEFT JOIN hotel_ratings hr ON hr.hotel_id = h.id \
     LEFT JOIN likes l ON l.hotel_id = h.id";

/// Repository for hotel CRUD and aggregate queries.
#[derive(Debug, Clone)]
pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    /// Create a new hotel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a hotel by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hotel>> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find hotel by id", e)
            })
    }

    /// Find a hotel with its engagement aggregates.
    pub async fn find_with_stats(&self, id: Uuid) -> AppResult<Option<HotelWithStats>> {
        let query = format!("{STATS_QUERY} WHERE h.id = $1 GROUP BY h.id");
        sqlx::query_as::<_, HotelWithStats>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load hotel", e))
    }

    /// List hotels with pagination, newest first. Optional star filter
    /// and text search over name and address.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        stars: Option<i16>,
        search: Option<&str>,
    ) -> AppResult<PageResponse<Hotel>> {
        let pattern = search.map(|q| format!("%{q}%"));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM hotels \
             WHERE ($1::smallint IS NULL OR stars = $1) \
             AND ($2::text IS NULL OR name ILIKE $2 OR address ILIKE $2)",
        )
        .bind(stars)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count hotels", e))?;

        let hotels = sqlx::query_as::<_, Hotel>(
            "SELECT * FROM hotels \
             WHERE ($1::smallint IS NULL OR stars = $1) \
             AND ($2::text IS NULL OR name ILIKE $2 OR address ILIKE $2) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(stars)
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hotels", e))?;

        Ok(PageResponse::new(
            hotels,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List hotels belonging to an owner.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Hotel>> {
        sqlx::query_as::<_, Hotel>(
            "SELECT * FROM hotels WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list owner hotels", e))
    }

    /// Load every hotel with its aggregates. Ordering is left to the
    /// caller's ranking comparator.
    pub async fn find_all_with_stats(&self) -> AppResult<Vec<HotelWithStats>> {
        let query = format!("{STATS_QUERY} GROUP BY h.id");
        sqlx::query_as::<_, HotelWithStats>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load hotel aggregates", e)
            })
    }

    /// Create a new hotel.
    pub async fn create(&self, data: &CreateHotel) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            "INSERT INTO hotels (owner_id, name, address, description, stars) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.description)
        .bind(data.stars)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create hotel", e))
    }

    /// Update a hotel's editable fields.
    pub async fn update(&self, id: Uuid, data: &UpdateHotel) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            "UPDATE hotels SET name = COALESCE($2, name), \
                               address = COALESCE($3, address), \
                               description = COALESCE($4, description), \
                               stars = COALESCE($5, stars), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.description)
        .bind(data.stars)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update hotel", e))?
        .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))
    }

    /// Delete a hotel. Rooms, bookings and engagement rows cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete hotel", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Atomically bump the materialized bookings counter inside the
    /// caller's transaction.
    pub async fn increment_bookings_count(
        &self,
        conn: &mut PgConnection,
        hotel_id: Uuid,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE hotels SET bookings_count = bookings_count + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(hotel_id)
        .execute(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to increment bookings count", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Hotel {hotel_id} not found")));
        }
        Ok(())
    }
}
