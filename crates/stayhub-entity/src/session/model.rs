//! Session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side login session. The session row is the revocation
/// authority: a token whose session has been deleted is rejected even
/// if the JWT itself is still within its validity window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier, embedded in the token claims.
    pub id: Uuid,
    /// The logged-in user.
    pub user_id: Uuid,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires regardless of token validity.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether this session has passed its expiry.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}
