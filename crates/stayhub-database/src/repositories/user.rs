//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::user::model::CreateUser;
use stayhub_entity::user::User;

/// Repository for user accounts and their account-flow codes.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new, inactive user account.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, activation_code) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.activation_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Activate the account matching the given activation code.
    /// Returns the activated user, or `None` if no inactive account
    /// carries that code.
    pub async fn activate_by_code(&self, code: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET is_active = TRUE, activation_code = NULL, updated_at = NOW() \
             WHERE activation_code = $1 AND is_active = FALSE \
             RETURNING *",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to activate user", e))
    }

    /// Store a password reset code on a user.
    pub async fn set_reset_code(&self, user_id: Uuid, code: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE users SET reset_code = $2, updated_at = NOW() WHERE id = $1")
                .bind(user_id)
                .bind(code)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to set reset code", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }

    /// Consume a reset code, replacing the password hash and clearing
    /// the code in one statement. Returns the user, or `None` if the
    /// code did not match any account.
    pub async fn reset_password_by_code(
        &self,
        code: &str,
        password_hash: &str,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET password_hash = $2, reset_code = NULL, updated_at = NOW() \
             WHERE reset_code = $1 \
             RETURNING *",
        )
        .bind(code)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reset password", e))
    }

    /// Update a user's password hash.
    pub async fn update_password(&self, user_id: Uuid, password_hash: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(user_id)
                .bind(password_hash)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update password", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }

    /// Grant or revoke owner rights.
    pub async fn set_owner(&self, user_id: Uuid, is_owner: bool) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET is_owner = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(is_owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update owner flag", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }
}
