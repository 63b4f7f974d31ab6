//! Background job model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::JobStatus;

/// A queued unit of background work, usually an outgoing email.
///
/// Jobs are written in the same transaction as the state change that
/// triggers them, so a committed booking always has its confirmation
/// job and a rolled-back one never does.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: Uuid,
    /// Dispatch key, e.g. `"booking_confirmation"`.
    pub job_type: String,
    /// Handler-specific JSON payload.
    pub payload: serde_json::Value,
    /// Current lifecycle state.
    pub status: JobStatus,
    /// Number of attempts made so far.
    pub attempts: i32,
    /// Attempts allowed before the job is marked failed.
    pub max_attempts: i32,
    /// Error message from the most recent failed attempt.
    pub last_error: Option<String>,
    /// Earliest time the job may run.
    pub scheduled_at: DateTime<Utc>,
    /// When the job was enqueued.
    pub created_at: DateTime<Utc>,
    /// When the job row was last touched.
    pub updated_at: DateTime<Utc>,
}

/// Data required to enqueue a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    /// Dispatch key.
    pub job_type: String,
    /// Handler-specific JSON payload.
    pub payload: serde_json::Value,
    /// Attempts allowed before the job is marked failed.
    pub max_attempts: i32,
}
