//! Background job entity and typed payloads.

pub mod model;
pub mod payload;
pub mod status;

/// Dispatch key for booking confirmation emails.
pub const JOB_BOOKING_CONFIRMATION: &str = "booking_confirmation";
/// Dispatch key for account activation emails.
pub const JOB_ACTIVATION_EMAIL: &str = "activation_email";
/// Dispatch key for password reset emails.
pub const JOB_PASSWORD_RESET_EMAIL: &str = "password_reset_email";
/// Dispatch key for owner request decision emails.
pub const JOB_OWNER_DECISION_EMAIL: &str = "owner_decision_email";

pub use model::{Job, NewJob};
pub use payload::{
    ActivationEmailPayload, BookingConfirmationPayload, OwnerDecisionPayload, PasswordResetPayload,
};
pub use status::JobStatus;
