//! Hotel reviews.

pub mod service;

pub use service::ReviewService;
