//! Outgoing SMTP mail with a log-only mode for development.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use stayhub_core::config::MailConfig;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;

/// Sends transactional mail. With delivery disabled, messages are
/// logged and dropped; job handlers behave identically either way.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from_address: String,
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("enabled", &self.transport.is_some())
            .field("from_address", &self.from_address)
            .finish()
    }
}

impl Mailer {
    /// Build a mailer from configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let transport = if config.enabled {
            let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| {
                    AppError::configuration(format!("Invalid SMTP relay configuration: {e}"))
                })?
                .port(config.smtp_port);

            if !config.smtp_username.is_empty() {
                builder = builder.credentials(Credentials::new(
                    config.smtp_username.clone(),
                    config.smtp_password.clone(),
                ));
            }
            Some(builder.build())
        } else {
            None
        };

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }

    /// Send a plain-text message.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let Some(ref transport) = self.transport else {
            info!(to, subject, "Mail delivery disabled; message logged only");
            debug!(body, "Suppressed mail body");
            return Ok(());
        };

        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| AppError::configuration(format!("Invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::validation(format!("Invalid recipient address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::internal(format!("Failed to build message: {e}")))?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::external_service(format!("SMTP delivery failed: {e}")))?;

        debug!(to, subject, "Mail sent");
        Ok(())
    }
}
