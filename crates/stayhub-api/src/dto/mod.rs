//! Request and response DTOs.

pub mod request;
pub mod response;

use stayhub_core::error::AppError;
use validator::Validate;

/// Runs `validator` checks on a request body, flattening the report
/// into a single validation error message.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate().map_err(|report| {
        let mut parts: Vec<String> = report
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let detail = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {detail}")
            })
            .collect();
        parts.sort();
        AppError::validation(parts.join("; "))
    })
}
