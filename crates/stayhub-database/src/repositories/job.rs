//! Job repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::job::{Job, NewJob};

/// Repository for the notification outbox and queue operations.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    /// Enqueue a job.
    pub async fn enqueue(&self, data: &NewJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (job_type, payload, max_attempts) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.job_type)
        .bind(&data.payload)
        .bind(data.max_attempts)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to enqueue job", e))
    }

    /// Enqueue a job inside the caller's transaction, so the job row
    /// commits or rolls back together with the triggering change.
    pub async fn enqueue_in_tx(&self, conn: &mut PgConnection, data: &NewJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (job_type, payload, max_attempts) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.job_type)
        .bind(&data.payload)
        .bind(data.max_attempts)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to enqueue job", e))
    }

    /// Claim the next due pending job (SKIP LOCKED for concurrency).
    /// The claim itself counts as an attempt.
    pub async fn dequeue(&self) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET status = 'running', attempts = attempts + 1, updated_at = NOW() \
             WHERE id = ( \
                SELECT id FROM jobs \
                WHERE status = 'pending' AND scheduled_at <= NOW() \
                ORDER BY created_at ASC \
                FOR UPDATE SKIP LOCKED \
                LIMIT 1 \
             ) RETURNING *",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to dequeue job", e))
    }

    /// Mark a job as completed.
    pub async fn complete(&self, job_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE jobs SET status = 'completed', updated_at = NOW() WHERE id = $1")
            .bind(job_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to complete job", e))?;
        Ok(())
    }

    /// Mark a job as permanently failed.
    pub async fn fail(&self, job_id: Uuid, error_message: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE jobs SET status = 'failed', last_error = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(job_id)
        .bind(error_message)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark job as failed", e)
        })?;
        Ok(())
    }

    /// Return a job to pending for a later retry, recording the error
    /// and pushing its due time back.
    pub async fn reschedule(
        &self,
        job_id: Uuid,
        error_message: &str,
        run_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE jobs SET status = 'pending', last_error = $2, scheduled_at = $3, \
             updated_at = NOW() WHERE id = $1",
        )
        .bind(job_id)
        .bind(error_message)
        .bind(run_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reschedule job", e))?;
        Ok(())
    }

    /// Clean up old completed/failed jobs.
    pub async fn cleanup_old(&self, before: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM jobs WHERE status IN ('completed', 'failed') AND updated_at < $1",
        )
        .bind(before)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to cleanup jobs", e))?;
        Ok(result.rows_affected())
    }
}
