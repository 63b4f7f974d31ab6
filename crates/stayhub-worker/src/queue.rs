//! Job queue abstraction over the outbox table.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_database::repositories::JobRepository;
use stayhub_entity::job::Job;

/// Base delay between retry attempts, scaled by the attempt number.
const RETRY_BACKOFF_SECONDS: i64 = 30;

/// Claims and settles jobs for the worker loop.
#[derive(Debug, Clone)]
pub struct JobQueue {
    repo: Arc<JobRepository>,
}

impl JobQueue {
    /// Create a new job queue.
    pub fn new(repo: Arc<JobRepository>) -> Self {
        Self { repo }
    }

    /// Claim the next due job, if any.
    pub async fn dequeue(&self) -> Result<Option<Job>, AppError> {
        let job = self.repo.dequeue().await?;
        if let Some(ref job) = job {
            debug!(job_id = %job.id, job_type = %job.job_type, "Dequeued job");
        }
        Ok(job)
    }

    /// Mark a job as completed successfully.
    pub async fn complete(&self, job_id: Uuid) -> Result<(), AppError> {
        self.repo.complete(job_id).await?;
        debug!(job_id = %job_id, "Job completed");
        Ok(())
    }

    /// Mark a job as permanently failed.
    pub async fn fail(&self, job_id: Uuid, error: &str) -> Result<(), AppError> {
        self.repo.fail(job_id, error).await?;
        debug!(job_id = %job_id, error, "Job failed");
        Ok(())
    }

    /// Push a job back to pending with linear backoff.
    pub async fn retry(&self, job: &Job, error: &str) -> Result<(), AppError> {
        let delay = Duration::seconds(RETRY_BACKOFF_SECONDS * i64::from(job.attempts.max(1)));
        let run_at = Utc::now() + delay;
        self.repo.reschedule(job.id, error, run_at).await?;
        debug!(job_id = %job.id, attempts = job.attempts, %run_at, "Job rescheduled");
        Ok(())
    }
}
