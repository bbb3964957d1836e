//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Loose email shape check: local part, `@`, domain with at least one dot.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile"));

/// Requirements a password must satisfy before it is accepted at reset time
///
/// Each flag corresponds to one rule; the password is acceptable only when
/// every flag is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordRequirements {
    /// Evaluate all password rules against the given candidate
    pub fn check(password: &str) -> Self {
        Self {
            min_length: password.len() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Whether every rule is satisfied
    pub fn all_satisfied(&self) -> bool {
        self.min_length && self.uppercase && self.lowercase && self.digit && self.special
    }
}

/// Check if an email address has a plausible shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Derive the login username from a display name: lowercase with whitespace
/// runs collapsed to single underscores ("Jane Doe" -> "jane_doe")
pub fn username_from_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
