//! Guest engagement: ratings, likes, favorites.

pub mod service;

pub use service::{EngagementService, ToggleOutcome};
