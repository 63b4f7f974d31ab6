//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use stayhub_core::config::AuthConfig;
use stayhub_core::error::AppError;

use super::claims::Claims;

/// Validates access token signatures and expiry. Revocation is handled
/// separately by the session lookup, not here.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use stayhub_core::config::AuthConfig;
    use stayhub_entity::user::User;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-for-unit-tests".to_string(),
            jwt_access_ttl_minutes: 60,
            session_ttl_hours: 168,
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "guest@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_owner: false,
            is_staff: false,
            is_active: true,
            activation_code: None,
            reset_code: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user = test_user();
        let session_id = Uuid::new_v4();
        let (token, _) = encoder.generate_access_token(&user, session_id).unwrap();

        let claims = decoder.decode_access_token(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.sid, session_id);
        assert_eq!(claims.email, user.email);
        assert!(!claims.is_owner);
    }

    #[test]
    fn test_rejects_token_signed_with_other_secret() {
        let encoder = JwtEncoder::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..test_config()
        });
        let decoder = JwtDecoder::new(&test_config());

        let (token, _) = encoder
            .generate_access_token(&test_user(), Uuid::new_v4())
            .unwrap();
        assert!(decoder.decode_access_token(&token).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(decoder.decode_access_token("not.a.token").is_err());
    }
}
