//! Email job handlers.
//!
//! Each handler decodes its typed payload, renders a plain-text body
//! and hands it to the mailer. A malformed payload is permanent; an
//! SMTP failure is transient and retried with backoff.

use std::sync::Arc;

use async_trait::async_trait;

use stayhub_entity::job::{
    ActivationEmailPayload, BookingConfirmationPayload, JOB_ACTIVATION_EMAIL,
    JOB_BOOKING_CONFIRMATION, JOB_OWNER_DECISION_EMAIL, JOB_PASSWORD_RESET_EMAIL, Job,
    OwnerDecisionPayload, PasswordResetPayload,
};

use crate::executor::{JobExecutionError, JobHandler};
use crate::mailer::Mailer;

fn decode_payload<T: serde::de::DeserializeOwned>(job: &Job) -> Result<T, JobExecutionError> {
    serde_json::from_value(job.payload.clone()).map_err(|e| {
        JobExecutionError::Permanent(format!("Malformed payload for job {}: {e}", job.id))
    })
}

async fn deliver(
    mailer: &Mailer,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<(), JobExecutionError> {
    mailer
        .send(to, subject, body)
        .await
        .map_err(|e| JobExecutionError::Transient(e.to_string()))
}

/// Sends the booking confirmation email.
#[derive(Debug)]
pub struct BookingConfirmationJob {
    mailer: Arc<Mailer>,
}

impl BookingConfirmationJob {
    pub fn new(mailer: Arc<Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl JobHandler for BookingConfirmationJob {
    fn job_type(&self) -> &str {
        JOB_BOOKING_CONFIRMATION
    }

    async fn execute(&self, job: &Job) -> Result<(), JobExecutionError> {
        let payload: BookingConfirmationPayload = decode_payload(job)?;
        let body = format!(
            "Your booking at {} is confirmed.\n\n\
             Room: {}\n\
             Check-in: {}\n\
             Check-out: {}\n\
             Total cost: {}\n",
            payload.hotel_name,
            payload.room_number,
            payload.check_in,
            payload.check_out,
            payload.total_cost,
        );
        deliver(
            &self.mailer,
            &payload.recipient,
            "Your StayHub booking is confirmed",
            &body,
        )
        .await
    }
}

/// Sends the account activation email.
#[derive(Debug)]
pub struct ActivationEmailJob {
    mailer: Arc<Mailer>,
}

impl ActivationEmailJob {
    pub fn new(mailer: Arc<Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl JobHandler for ActivationEmailJob {
    fn job_type(&self) -> &str {
        JOB_ACTIVATION_EMAIL
    }

    async fn execute(&self, job: &Job) -> Result<(), JobExecutionError> {
        let payload: ActivationEmailPayload = decode_payload(job)?;
        let body = format!(
            "Welcome to StayHub!\n\n\
             Your activation code is: {}\n",
            payload.activation_code,
        );
        deliver(
            &self.mailer,
            &payload.recipient,
            "Activate your StayHub account",
            &body,
        )
        .await
    }
}

/// Sends the password reset email.
#[derive(Debug)]
pub struct PasswordResetEmailJob {
    mailer: Arc<Mailer>,
}

impl PasswordResetEmailJob {
    pub fn new(mailer: Arc<Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl JobHandler for PasswordResetEmailJob {
    fn job_type(&self) -> &str {
        JOB_PASSWORD_RESET_EMAIL
    }

    async fn execute(&self, job: &Job) -> Result<(), JobExecutionError> {
        let payload: PasswordResetPayload = decode_payload(job)?;
        let body = format!(
            "A password reset was requested for your account.\n\n\
             Your reset code is: {}\n\n\
             If you did not request this, you can ignore this message.\n",
            payload.reset_code,
        );
        deliver(
            &self.mailer,
            &payload.recipient,
            "Reset your StayHub password",
            &body,
        )
        .await
    }
}

/// Notifies an applicant about the decision on their owner request.
#[derive(Debug)]
pub struct OwnerDecisionEmailJob {
    mailer: Arc<Mailer>,
}

impl OwnerDecisionEmailJob {
    pub fn new(mailer: Arc<Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl JobHandler for OwnerDecisionEmailJob {
    fn job_type(&self) -> &str {
        JOB_OWNER_DECISION_EMAIL
    }

    async fn execute(&self, job: &Job) -> Result<(), JobExecutionError> {
        let payload: OwnerDecisionPayload = decode_payload(job)?;
        let (subject, body) = if payload.approved {
            (
                "Your StayHub owner request was approved",
                "Congratulations! Your request for owner rights was approved.\n\
                 You can now list hotels on StayHub.\n",
            )
        } else {
            (
                "Your StayHub owner request was declined",
                "Unfortunately your request for owner rights was declined.\n\
                 You may apply again at any time.\n",
            )
        };
        deliver(&self.mailer, &payload.recipient, subject, body).await
    }
}
