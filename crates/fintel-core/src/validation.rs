//! Input validation that runs before any backend round-trip.
//!
//! Messages are user-facing and returned verbatim.

use crate::errors::CoreError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a registration form.
///
/// Checks run in a fixed order: e-mail present, passwords match, password
/// long enough.
///
/// # Errors
///
/// Returns `CoreError::Validation` describing the first failing check.
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), CoreError> {
    require("Email", email)?;
    if password != confirm_password {
        return Err(CoreError::validation("Passwords do not match"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a sign-in form. Only presence is checked; the backend decides
/// whether the credentials are correct.
///
/// # Errors
///
/// Returns `CoreError::Validation` when either field is blank.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), CoreError> {
    require("Email", email)?;
    require("Password", password)
}

/// # Errors
///
/// Returns `CoreError::Validation` when the name is blank.
pub fn validate_collection_name(name: &str) -> Result<(), CoreError> {
    require("Collection name", name)
}

/// # Errors
///
/// Returns `CoreError::Validation` when both sides name the same brand.
pub fn validate_comparison_pair(franchise_a_id: &str, franchise_b_id: &str) -> Result<(), CoreError> {
    require("First franchise", franchise_a_id)?;
    require("Second franchise", franchise_b_id)?;
    if franchise_a_id == franchise_b_id {
        return Err(CoreError::validation(
            "Choose two different franchises to compare",
        ));
    }
    Ok(())
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), CoreError>) -> String {
        result.expect_err("should be rejected").to_string()
    }

    #[test]
    fn registration_accepts_valid_form() {
        assert!(validate_registration("a@b.co", "secret1", "secret1").is_ok());
    }

    #[test]
    fn mismatch_is_reported_before_length() {
        assert_eq!(
            message(validate_registration("a@b.co", "abc", "abd")),
            "Passwords do not match"
        );
    }

    #[test]
    fn short_password_rejected() {
        assert_eq!(
            message(validate_registration("a@b.co", "abc", "abc")),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn blank_email_rejected() {
        assert_eq!(
            message(validate_registration("  ", "secret1", "secret1")),
            "Email is required"
        );
    }

    #[test]
    fn collection_name_must_not_be_blank() {
        assert!(validate_collection_name("Food picks").is_ok());
        assert_eq!(
            message(validate_collection_name("   ")),
            "Collection name is required"
        );
    }

    #[test]
    fn comparison_needs_two_distinct_brands() {
        assert!(validate_comparison_pair("brd-1", "brd-2").is_ok());
        assert!(validate_comparison_pair("brd-1", "brd-1").is_err());
        assert!(validate_comparison_pair("", "brd-2").is_err());
    }

    #[test]
    fn sign_in_requires_both_fields() {
        assert!(validate_sign_in("a@b.co", "x").is_ok());
        assert_eq!(message(validate_sign_in("a@b.co", "")), "Password is required");
    }
}
