//! Room management.

pub mod service;

pub use service::RoomService;
