//! Random codes for account activation and password reset.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of activation and reset codes.
pub const CODE_LENGTH: usize = 10;

/// Generate a random alphanumeric code, emailed to the user and later
/// matched against the stored column.
pub fn generate_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_codes_are_not_repeated() {
        assert_ne!(generate_code(), generate_code());
    }
}
