//! Repository implementations for all StayHub entities.

pub mod booking;
pub mod engagement;
pub mod hotel;
pub mod job;
pub mod owner_request;
pub mod review;
pub mod room;
pub mod session;
pub mod user;

pub use booking::BookingRepository;
pub use engagement::EngagementRepository;
pub use hotel::HotelRepository;
pub use job::JobRepository;
pub use owner_request::OwnerRequestRepository;
pub use review::ReviewRepository;
pub use room::RoomRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
