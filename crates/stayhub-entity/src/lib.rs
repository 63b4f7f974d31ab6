//! # stayhub-entity
//!
//! Persisted domain models for StayHub: hotels, rooms, bookings,
//! engagement records (ratings, likes, favorites), reviews, users,
//! owner requests, sessions, and background jobs.

pub mod booking;
pub mod engagement;
pub mod hotel;
pub mod job;
pub mod owner_request;
pub mod review;
pub mod room;
pub mod session;
pub mod user;
