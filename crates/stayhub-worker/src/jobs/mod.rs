//! Built-in job handlers.

pub mod email;

pub use email::{
    ActivationEmailJob, BookingConfirmationJob, OwnerDecisionEmailJob, PasswordResetEmailJob,
};
