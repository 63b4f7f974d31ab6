//! Background notification processing for StayHub.
//!
//! This crate provides:
//! - A worker runner that polls for and executes queued jobs
//! - A job executor that dispatches jobs to the correct handler
//! - Email job implementations backed by an SMTP mailer

pub mod executor;
pub mod jobs;
pub mod mailer;
pub mod queue;
pub mod runner;

pub use executor::{JobExecutor, JobHandler};
pub use mailer::Mailer;
pub use queue::JobQueue;
pub use runner::WorkerRunner;
