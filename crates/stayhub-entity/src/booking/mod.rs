//! Booking entity and date-range overlap predicate.

pub mod model;

pub use model::{Booking, NewBooking, ranges_conflict};
