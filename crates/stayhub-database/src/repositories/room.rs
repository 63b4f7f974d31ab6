//! Room repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::room::{CreateRoom, Room, RoomStatus, UpdateRoom};

/// Repository for rooms, including the row lock that serializes
/// concurrent bookings of the same room.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find room by id", e)
            })
    }

    /// List rooms ordered by room number, optionally scoped to one
    /// hotel.
    pub async fn find_all(&self, hotel_id: Option<Uuid>) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms \
             WHERE ($1::uuid IS NULL OR hotel_id = $1) \
             ORDER BY room_number ASC",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    /// Create a new room.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (hotel_id, room_number, room_type, capacity, price_per_night) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.hotel_id)
        .bind(&data.room_number)
        .bind(data.room_type)
        .bind(data.capacity)
        .bind(data.price_per_night)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("rooms_hotel_id_room_number_key") =>
            {
                AppError::conflict(format!(
                    "Room '{}' already exists in this hotel",
                    data.room_number
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create room", e),
        })
    }

    /// Update a room's editable fields.
    pub async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET room_number = COALESCE($2, room_number), \
                              room_type = COALESCE($3, room_type), \
                              capacity = COALESCE($4, capacity), \
                              price_per_night = COALESCE($5, price_per_night) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.room_number)
        .bind(data.room_type)
        .bind(data.capacity)
        .bind(data.price_per_night)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("rooms_hotel_id_room_number_key") =>
            {
                AppError::conflict("Room number already exists in this hotel".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update room", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    /// Delete a room. Its bookings cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete room", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Lock a room row for the duration of the caller's transaction.
    ///
    /// Every booking attempt for a room funnels through this lock, so
    /// two concurrent attempts on the same room serialize and the
    /// second one sees the first one's committed booking rows.
    pub async fn lock_for_update(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock room", e))
    }

    /// Set the display status inside the caller's transaction.
    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: RoomStatus,
    ) -> AppResult<()> {
        sqlx::query("UPDATE rooms SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update room status", e)
            })?;
        Ok(())
    }
}
