//! Outgoing mail configuration.

use serde::{Deserialize, Serialize};

/// SMTP settings for transactional mail.
///
/// When `enabled` is false the mailer logs messages instead of sending
/// them, which is the default for development and test environments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Whether to actually deliver mail over SMTP.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay hostname.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// From address for all outgoing mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@stayhub.local".to_string()
}
