use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

pub fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    validate_required(value)?;
    if !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("  jane.doe@example.co.uk "));
    }

    #[test]
    fn rejects_incomplete_addresses() {
        for email in ["a@b", "a", "", "a b@c.com", "a@@b.com", "@b.com"] {
            assert!(!is_valid_email(email), "{:?} should be rejected", email);
        }
    }

    #[test]
    fn empty_wins_over_format() {
        assert_eq!(validate_email("   "), Err(FieldError::Empty));
        assert_eq!(validate_email("nope"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@b.com"), Ok(()));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(validate_required(" \t\n"), Err(FieldError::Empty));
        assert_eq!(validate_required(" x "), Ok(()));
    }
}
