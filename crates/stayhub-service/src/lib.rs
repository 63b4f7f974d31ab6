//! # stayhub-service
//!
//! Business logic service layer for StayHub. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod booking;
pub mod context;
pub mod engagement;
pub mod hotel;
pub mod review;
pub mod room;

pub use account::{AccountService, OwnerRequestAdminService};
pub use booking::{AvailabilityChecker, BookingService};
pub use context::RequestContext;
pub use engagement::EngagementService;
pub use hotel::HotelService;
pub use review::ReviewService;
pub use room::RoomService;
