//! Hotel management and ranking.

pub mod ranking;
pub mod service;

pub use service::HotelService;
