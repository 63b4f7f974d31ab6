//! Account self-service: registration, activation, login, logout,
//! password management, and owner upgrade requests.

use std::sync::Arc;

use tracing::{info, warn};

use stayhub_auth::codes;
use stayhub_auth::jwt::JwtEncoder;
use stayhub_auth::password::PasswordHasher;
use stayhub_auth::session::SessionManager;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::{JobRepository, OwnerRequestRepository, UserRepository};
use stayhub_entity::job::{
    ActivationEmailPayload, JOB_ACTIVATION_EMAIL, JOB_PASSWORD_RESET_EMAIL, NewJob,
    PasswordResetPayload,
};
use stayhub_entity::owner_request::{OwnerRequest, OwnerRequestStatus};
use stayhub_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginOutcome {
    /// Signed access token.
    pub access_token: String,
    /// Token expiry.
    pub expires_at: chrono::DateTime<chrono::Utc>,
    /// The logged-in user.
    pub user: User,
}

/// Handles account lifecycle operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<UserRepository>,
    owner_requests: Arc<OwnerRequestRepository>,
    jobs: Arc<JobRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    sessions: Arc<SessionManager>,
    job_max_attempts: i32,
}

impl AccountService {
    /// Creates a new account service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<UserRepository>,
        owner_requests: Arc<OwnerRequestRepository>,
        jobs: Arc<JobRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        sessions: Arc<SessionManager>,
        job_max_attempts: i32,
    ) -> Self {
        Self {
            users,
            owner_requests,
            jobs,
            hasher,
            encoder,
            sessions,
            job_max_attempts,
        }
    }

    /// Register a new account. The account starts inactive; an
    /// activation code is queued for email delivery.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<User> {
        validate_email(email)?;
        validate_password(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let activation_code = codes::generate_code();

        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                activation_code: Some(activation_code.clone()),
            })
            .await?;

        let payload = ActivationEmailPayload {
            user_id: user.id,
            recipient: user.email.clone(),
            activation_code,
        };
        self.jobs
            .enqueue(&NewJob {
                job_type: JOB_ACTIVATION_EMAIL.to_string(),
                payload: serde_json::to_value(&payload)?,
                max_attempts: self.job_max_attempts,
            })
            .await?;

        info!(user_id = %user.id, "Account registered");
        Ok(user)
    }

    /// Activate an account by its emailed code.
    pub async fn activate(&self, code: &str) -> AppResult<User> {
        let user = self
            .users
            .activate_by_code(code)
            .await?
            .ok_or_else(|| AppError::validation("Invalid or already used activation code"))?;

        info!(user_id = %user.id, "Account activated");
        Ok(user)
    }

    /// Authenticate and mint a session-backed access token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Failed login attempt");
            return Err(AppError::unauthorized("Invalid email or password"));
        }
        if !user.is_active {
            return Err(AppError::unauthorized("Account is not activated"));
        }

        let session = self.sessions.create_session(user.id).await?;
        let (access_token, expires_at) = self.encoder.generate_access_token(&user, session.id)?;

        info!(user_id = %user.id, session_id = %session.id, "User logged in");
        Ok(LoginOutcome {
            access_token,
            expires_at,
            user,
        })
    }

    /// Log out, revoking the current session.
    pub async fn logout(&self, ctx: &RequestContext) -> AppResult<()> {
        self.sessions.terminate_session(ctx.session_id).await?;
        info!(user_id = %ctx.user_id, "User logged out");
        Ok(())
    }

    /// The authenticated user's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Change the password, verifying the current one first.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        validate_password(new_password)?;

        let user = self.get_profile(ctx).await?;
        if !self
            .hasher
            .verify_password(current_password, &user.password_hash)?
        {
            return Err(AppError::unauthorized("Current password is incorrect"));
        }

        let new_hash = self.hasher.hash_password(new_password)?;
        self.users.update_password(user.id, &new_hash).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }

    /// Start a password reset. Always succeeds so callers cannot probe
    /// which emails are registered.
    pub async fn request_password_reset(&self, email: &str) -> AppResult<()> {
        let Some(user) = self.users.find_by_email(email).await? else {
            info!("Password reset requested for unknown email");
            return Ok(());
        };

        let reset_code = codes::generate_code();
        self.users.set_reset_code(user.id, &reset_code).await?;

        let payload = PasswordResetPayload {
            user_id: user.id,
            recipient: user.email.clone(),
            reset_code,
        };
        self.jobs
            .enqueue(&NewJob {
                job_type: JOB_PASSWORD_RESET_EMAIL.to_string(),
                payload: serde_json::to_value(&payload)?,
                max_attempts: self.job_max_attempts,
            })
            .await?;

        info!(user_id = %user.id, "Password reset requested");
        Ok(())
    }

    /// Complete a password reset with the emailed code. All sessions
    /// are revoked.
    pub async fn confirm_password_reset(&self, code: &str, new_password: &str) -> AppResult<()> {
        validate_password(new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        let user = self
            .users
            .reset_password_by_code(code, &new_hash)
            .await?
            .ok_or_else(|| AppError::validation("Invalid or already used reset code"))?;

        self.sessions.terminate_all_for_user(user.id).await?;
        info!(user_id = %user.id, "Password reset completed");
        Ok(())
    }

    /// Ask to be promoted to hotel owner. Re-applying after a
    /// rejection re-opens the same request.
    pub async fn request_owner_upgrade(
        &self,
        ctx: &RequestContext,
        message: &str,
    ) -> AppResult<OwnerRequest> {
        if ctx.is_owner {
            return Err(AppError::conflict("You already have owner rights"));
        }
        if let Some(existing) = self.owner_requests.find_by_user(ctx.user_id).await? {
            if existing.status == OwnerRequestStatus::Pending {
                return Err(AppError::conflict("An owner request is already pending"));
            }
        }

        let request = self
            .owner_requests
            .upsert_pending(ctx.user_id, message)
            .await?;
        info!(user_id = %ctx.user_id, request_id = %request.id, "Owner upgrade requested");
        Ok(request)
    }
}

fn validate_email(email: &str) -> AppResult<()> {
    if !email.contains('@') || !email.contains('.') {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(())
}

fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
    }
}
