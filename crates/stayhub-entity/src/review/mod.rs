//! Review entity.

pub mod model;

pub use model::{CreateReview, Review};
