//! HTTP request handlers, grouped by domain.

pub mod account;
pub mod admin;
pub mod bookings;
pub mod health;
pub mod hotels;
pub mod reviews;
pub mod rooms;
