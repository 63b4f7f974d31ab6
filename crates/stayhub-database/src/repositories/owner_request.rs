//! Owner upgrade request repository.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::owner_request::{OwnerRequest, OwnerRequestStatus};

/// Repository for owner upgrade requests.
#[derive(Debug, Clone)]
pub struct OwnerRequestRepository {
    pool: PgPool,
}

impl OwnerRequestRepository {
    /// Create a new owner request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the request belonging to a user, if any.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<OwnerRequest>> {
        sqlx::query_as::<_, OwnerRequest>("SELECT * FROM owner_requests WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find owner request", e)
            })
    }

    /// Submit or re-submit a request. One row per user; a rejected
    /// request flips back to pending on re-application.
    pub async fn upsert_pending(&self, user_id: Uuid, message: &str) -> AppResult<OwnerRequest> {
        sqlx::query_as::<_, OwnerRequest>(
            "INSERT INTO owner_requests (user_id, message, status) VALUES ($1, $2, 'pending') \
             ON CONFLICT (user_id) \
             DO UPDATE SET status = 'pending', message = EXCLUDED.message, updated_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to submit owner request", e)
        })
    }

    /// List requests in a given state, oldest first.
    pub async fn find_by_status(&self, status: OwnerRequestStatus) -> AppResult<Vec<OwnerRequest>> {
        sqlx::query_as::<_, OwnerRequest>(
            "SELECT * FROM owner_requests WHERE status = $1 ORDER BY created_at ASC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list owner requests", e)
        })
    }

    /// Decide the pending requests in `ids`, returning the rows that
    /// were actually pending. Already-decided requests are skipped.
    pub async fn decide(
        &self,
        ids: &[Uuid],
        status: OwnerRequestStatus,
    ) -> AppResult<Vec<OwnerRequest>> {
        sqlx::query_as::<_, OwnerRequest>(
            "UPDATE owner_requests SET status = $2, updated_at = NOW() \
             WHERE id = ANY($1) AND status = 'pending' \
             RETURNING *",
        )
        .bind(ids)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to decide owner requests", e)
        })
    }
}
