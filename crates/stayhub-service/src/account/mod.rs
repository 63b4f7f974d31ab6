//! Account lifecycle and owner upgrade administration.

pub mod admin;
pub mod service;

pub use admin::OwnerRequestAdminService;
pub use service::AccountService;
