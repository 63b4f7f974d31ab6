//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign access tokens.
    pub jwt_secret: String,
    /// Access token lifetime in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Session lifetime in hours; sessions older than this are rejected.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
}

fn default_access_ttl() -> u64 {
    60
}

fn default_session_ttl() -> u64 {
    24 * 7
}
