//! Error type definitions for authentication, session tokens, one-time
//! tokens, and input validation.
//!
//! Error messages here are developer-facing; the presentation layer maps each
//! variant to its user-facing HTTP status and message.

use thiserror::Error;

/// Authentication and account lifecycle errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User already exists with this email")]
    DuplicateEmail,

    #[error("Invalid email/username or password")]
    InvalidCredentials,

    #[error("Account is restricted")]
    AccountRestricted,

    #[error("Email not verified: {email}")]
    EmailNotVerified { email: String },

    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },
}

impl AuthError {
    /// Convenience constructor for role and ownership failures
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }
}

/// Session token errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// One-time token ledger errors
///
/// `Mismatch` deliberately leaves the stored entry alive so the caller can
/// retry within the TTL; `Expired` reports an entry that was purged on
/// access.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("No token found for this address")]
    NotFound,

    #[error("Token has expired")]
    Expired,

    #[error("Token value does not match")]
    Mismatch,

    #[error("Token storage failure: {0}")]
    Storage(String),
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Password does not meet requirements")]
    WeakPassword,

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}
