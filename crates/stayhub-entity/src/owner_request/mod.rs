//! Owner upgrade request entity.

pub mod model;
pub mod status;

pub use model::OwnerRequest;
pub use status::OwnerRequestStatus;
