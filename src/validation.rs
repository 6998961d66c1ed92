//! Form field validation.
//!
//! Pure functions, independent of any UI, applied before a login or
//! registration attempt ever reaches the credential service. The email
//! check is intentionally permissive; this is a demo, not an RFC parser.

use crate::{CogsError, Result};

/// True iff `s` contains both an '@' and a '.'
pub fn is_valid_email(s: &str) -> bool {
    s.contains('@') && s.contains('.')
}

/// True iff `s` is at least 6 characters long
pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= 6
}

/// Checks a login form; returns a user-facing message on failure.
///
/// Validation failures block the action before any store access.
pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.is_empty() || password.is_empty() {
        return Err(validation_error("Please fill in all fields."));
    }
    if !is_valid_email(email) {
        return Err(validation_error(
            "Invalid email. Please enter a valid email address.",
        ));
    }
    if !is_valid_password(password) {
        return Err(validation_error(
            "Invalid password. The password must be at least 6 characters long.",
        ));
    }
    Ok(())
}

/// Checks a registration form; returns a user-facing message on failure
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<()> {
    if name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(validation_error("Please fill in all fields."));
    }
    if !is_valid_email(email) {
        return Err(validation_error(
            "Invalid email. Please enter a valid email address.",
        ));
    }
    if !is_valid_password(password) {
        return Err(validation_error(
            "Invalid password. The password must be at least 6 characters long.",
        ));
    }
    if password != confirm_password {
        return Err(validation_error("Passwords do not match."));
    }
    Ok(())
}

fn validation_error(message: &str) -> CogsError {
    CogsError::Validation {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_both_at_and_dot() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a.b")); // missing '@'
        assert!(!is_valid_email("a@b")); // missing '.'
    }

    #[test]
    fn password_needs_six_characters() {
        assert!(!is_valid_password("12345"));
        assert!(is_valid_password("123456"));
    }

    #[test]
    fn login_rejects_empty_fields() {
        assert!(validate_login("", "secret123").is_err());
        assert!(validate_login("a@b.c", "").is_err());
        assert!(validate_login("a@b.c", "secret123").is_ok());
    }

    #[test]
    fn registration_requires_matching_passwords() {
        let err = validate_registration("Ana", "a@b.c", "secret123", "different")
            .unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match.");
    }

    #[test]
    fn registration_rejects_any_empty_field() {
        assert!(validate_registration("", "a@b.c", "secret123", "secret123").is_err());
        assert!(validate_registration("Ana", "", "secret123", "secret123").is_err());
        assert!(validate_registration("Ana", "a@b.c", "", "secret123").is_err());
        assert!(validate_registration("Ana", "a@b.c", "secret123", "").is_err());
        assert!(validate_registration("Ana", "a@b.c", "secret123", "secret123").is_ok());
    }

    #[test]
    fn registration_rejects_short_or_malformed_input() {
        assert!(validate_registration("Ana", "not-an-email", "secret123", "secret123").is_err());
        assert!(validate_registration("Ana", "a@b.c", "12345", "12345").is_err());
    }
}
