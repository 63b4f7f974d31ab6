//! Session lifecycle: create on login, validate per request, terminate
//! on logout.

use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use stayhub_core::config::AuthConfig;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::SessionRepository;
use stayhub_entity::session::Session;

/// Manages server-side sessions backing issued tokens.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: SessionRepository,
    session_ttl_hours: i64,
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new(sessions: SessionRepository, config: &AuthConfig) -> Self {
        Self {
            sessions,
            session_ttl_hours: config.session_ttl_hours as i64,
        }
    }

    /// Create a session for a freshly authenticated user.
    pub async fn create_session(&self, user_id: Uuid) -> AppResult<Session> {
        let expires_at = Utc::now() + Duration::hours(self.session_ttl_hours);
        let session = self.sessions.create(user_id, expires_at).await?;
        debug!(session_id = %session.id, user_id = %user_id, "Session created");
        Ok(session)
    }

    /// Validate that the session behind a token still exists and has
    /// not expired. A missing row means the token was revoked.
    pub async fn validate_session(&self, session_id: Uuid) -> AppResult<Session> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session has been revoked"))?;

        if session.is_expired() {
            return Err(AppError::unauthorized("Session has expired"));
        }
        Ok(session)
    }

    /// Terminate a single session (logout).
    pub async fn terminate_session(&self, session_id: Uuid) -> AppResult<()> {
        self.sessions.delete(session_id).await?;
        debug!(session_id = %session_id, "Session terminated");
        Ok(())
    }

    /// Terminate every session of a user, used after password changes.
    pub async fn terminate_all_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let removed = self.sessions.delete_by_user(user_id).await?;
        debug!(user_id = %user_id, removed, "All user sessions terminated");
        Ok(removed)
    }
}
