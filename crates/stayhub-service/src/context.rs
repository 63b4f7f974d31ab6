//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_auth::policy::Actor;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting and from *which* session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The email (convenience field from JWT claims).
    pub email: String,
    /// Owner flag at the time the token was issued.
    pub is_owner: bool,
    /// Staff flag at the time the token was issued.
    pub is_staff: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        user_id: Uuid,
        session_id: Uuid,
        email: String,
        is_owner: bool,
        is_staff: bool,
    ) -> Self {
        Self {
            user_id,
            session_id,
            email,
            is_owner,
            is_staff,
            request_time: Utc::now(),
        }
    }

    /// The caller's flags as a policy actor.
    pub fn actor(&self) -> Actor {
        Actor {
            is_owner: self.is_owner,
            is_staff: self.is_staff,
        }
    }
}
