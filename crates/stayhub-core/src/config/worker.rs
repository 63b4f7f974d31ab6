//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Settings for the notification worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker runs inside this process.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Maximum number of jobs executed concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
    /// How often to poll the job queue, in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Default retry budget for a job.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: i32,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            concurrency: default_concurrency(),
            poll_interval_seconds: default_poll_interval(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_concurrency() -> u32 {
    4
}

fn default_poll_interval() -> u64 {
    5
}

fn default_max_attempts() -> i32 {
    3
}
