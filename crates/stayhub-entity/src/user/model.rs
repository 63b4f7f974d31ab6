//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user. Email is the login identity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, unique, used to log in.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the user may create and manage hotels.
    pub is_owner: bool,
    /// Whether the user may administer owner requests.
    pub is_staff: bool,
    /// Whether the account has been activated.
    pub is_active: bool,
    /// Pending activation code; cleared on successful activation.
    #[serde(skip_serializing)]
    pub activation_code: Option<String>,
    /// Pending password-reset code; cleared on successful reset.
    #[serde(skip_serializing)]
    pub reset_code: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Activation code to send to the new user.
    pub activation_code: Option<String>,
}
