//! Typed payloads for the email job handlers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for the `booking_confirmation` job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmationPayload {
    pub booking_id: Uuid,
    pub recipient: String,
    pub hotel_name: String,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_cost: Decimal,
}

/// Payload for the `activation_email` job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationEmailPayload {
    pub user_id: Uuid,
    pub recipient: String,
    pub activation_code: String,
}

/// Payload for the `password_reset_email` job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetPayload {
    pub user_id: Uuid,
    pub recipient: String,
    pub reset_code: String,
}

/// Payload for the `owner_decision_email` job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerDecisionPayload {
    pub user_id: Uuid,
    pub recipient: String,
    pub approved: bool,
}
