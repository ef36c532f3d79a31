//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("valid email regex")
});

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("valid uuid regex")
});

/// Check whether a string looks like an email address
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check whether a string is a canonical UUID
pub fn is_uuid(value: &str) -> bool {
    UUID_RE.is_match(value)
}

/// Password policy: 8-128 characters with at least one letter and one digit
pub fn is_valid_password(value: &str) -> bool {
    let len = value.chars().count();
    if !(8..=128).contains(&len) {
        return false;
    }
    value.chars().any(|c| c.is_ascii_alphabetic()) && value.chars().any(|c| c.is_ascii_digit())
}
