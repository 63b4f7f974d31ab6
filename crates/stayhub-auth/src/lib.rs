//! # stayhub-auth
//!
//! Authentication and authorization for the StayHub platform.
//!
//! ## Modules
//!
//! - `jwt` — access token creation and validation
//! - `password` — Argon2id password hashing
//! - `codes` — random activation and reset codes
//! - `session` — session lifecycle (create, validate, terminate)
//! - `policy` — static capability table over the user's flags

pub mod codes;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use policy::Capability;
pub use session::SessionManager;
