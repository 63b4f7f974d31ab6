//! Worker runner — main loop that polls for jobs and executes them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, watch};
use tokio::time;
use tracing::{error, info, trace, warn};

use stayhub_core::config::WorkerConfig;

use crate::executor::{JobExecutionError, JobExecutor};
use crate::queue::JobQueue;

/// Main worker loop. Claims one job per poll, runs it on a spawned
/// task, and bounds concurrency with a semaphore.
#[derive(Debug)]
pub struct WorkerRunner {
    queue: Arc<JobQueue>,
    executor: Arc<JobExecutor>,
    config: WorkerConfig,
}

impl WorkerRunner {
    /// Create a new worker runner.
    pub fn new(queue: Arc<JobQueue>, executor: Arc<JobExecutor>, config: WorkerConfig) -> Self {
        Self {
            queue,
            executor,
            config,
        }
    }

    /// Run until the cancel signal flips to `true`.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        info!(
            concurrency = self.config.concurrency,
            poll_interval = self.config.poll_interval_seconds,
            "Worker started"
        );

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency as usize));
        let poll_interval = Duration::from_secs(self.config.poll_interval_seconds);

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        info!("Worker received shutdown signal");
                        break;
                    }
                }
                _ = self.poll_and_execute(&semaphore) => {
                    tokio::select! {
                        _ = cancel.changed() => {
                            if *cancel.borrow() {
                                info!("Worker shutting down");
                                break;
                            }
                        }
                        _ = time::sleep(poll_interval) => {}
                    }
                }
            }
        }

        info!("Worker waiting for in-flight jobs to complete...");
        let max_permits = self.config.concurrency;
        let _ = time::timeout(Duration::from_secs(30), semaphore.acquire_many(max_permits)).await;
        info!("Worker shut down complete");
    }

    /// Claim one job and run it on its own task if a slot is free.
    async fn poll_and_execute(&self, semaphore: &Arc<Semaphore>) {
        let permit = match semaphore.clone().try_acquire_owned() {
            Ok(p) => p,
            Err(_) => {
                trace!("All worker slots occupied, waiting...");
                return;
            }
        };

        match self.queue.dequeue().await {
            Ok(Some(job)) => {
                let queue = Arc::clone(&self.queue);
                let executor = Arc::clone(&self.executor);

                tokio::spawn(async move {
                    let _permit = permit;
                    let job_id = job.id;

                    match executor.execute(&job).await {
                        Ok(()) => {
                            if let Err(e) = queue.complete(job_id).await {
                                error!(job_id = %job_id, error = %e, "Failed to mark job as completed");
                            }
                        }
                        Err(JobExecutionError::Transient(msg)) => {
                            warn!(job_id = %job_id, error = %msg, "Job failed (transient)");
                            let settle = if job.attempts < job.max_attempts {
                                queue.retry(&job, &msg).await
                            } else {
                                queue.fail(job_id, &msg).await
                            };
                            if let Err(e) = settle {
                                error!(job_id = %job_id, error = %e, "Failed to settle job");
                            }
                        }
                        Err(JobExecutionError::Permanent(msg)) => {
                            error!(job_id = %job_id, error = %msg, "Job failed permanently");
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                error!(job_id = %job_id, error = %e, "Failed to mark job as failed");
                            }
                        }
                        Err(JobExecutionError::Internal(err)) => {
                            let msg = err.to_string();
                            error!(job_id = %job_id, error = %msg, "Job internal error");
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                error!(job_id = %job_id, error = %e, "Failed to mark job as failed");
                            }
                        }
                    }
                });
            }
            Ok(None) => {
                drop(permit);
                trace!("No jobs available");
            }
            Err(e) => {
                drop(permit);
                error!(error = %e, "Failed to dequeue job");
            }
        }
    }
}
