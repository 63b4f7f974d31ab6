//! Booking workflow and availability checking.

pub mod availability;
pub mod service;

pub use availability::AvailabilityChecker;
pub use service::{BookingRequest, BookingService};
