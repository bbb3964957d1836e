//! One-time token entity used by the verification-code and password-reset
//! ledgers.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Verification codes live for 5 minutes
pub const VERIFICATION_CODE_TTL_MINUTES: i64 = 5;

/// Password reset tokens live for 24 hours
pub const RESET_TOKEN_TTL_HOURS: i64 = 24;

/// Number of random bytes behind a reset token (hex-encoded to 64 chars)
pub const RESET_TOKEN_BYTES: usize = 32;

/// The two token families handled by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// 4-digit numeric email verification code
    VerificationCode,
    /// High-entropy hex password reset token
    ResetToken,
}

impl TokenKind {
    /// Lifetime for freshly issued tokens of this kind
    pub fn ttl(&self) -> Duration {
        match self {
            TokenKind::VerificationCode => Duration::minutes(VERIFICATION_CODE_TTL_MINUTES),
            TokenKind::ResetToken => Duration::hours(RESET_TOKEN_TTL_HOURS),
        }
    }

    /// Generate a fresh secret value for this kind
    fn generate_value(&self) -> String {
        match self {
            TokenKind::VerificationCode => {
                let code: u32 = rand::thread_rng().gen_range(1000..=9999);
                code.to_string()
            }
            TokenKind::ResetToken => {
                let mut bytes = [0u8; RESET_TOKEN_BYTES];
                rand::thread_rng().fill(&mut bytes[..]);
                hex::encode(bytes)
            }
        }
    }
}

/// A single-use secret bound to an absolute expiry instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeToken {
    /// The secret value presented back by the user
    pub value: String,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the token is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl OneTimeToken {
    /// Generates a fresh token of the given kind with its default lifetime
    pub fn generate(kind: TokenKind) -> Self {
        let now = Utc::now();
        Self {
            value: kind.generate_value(),
            issued_at: now,
            expires_at: now + kind.ttl(),
        }
    }

    /// Builds a token with an explicit value and lifetime
    pub fn with_value(value: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            value: value.into(),
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// Checks whether the token's lifetime has elapsed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares a candidate value against the stored secret
    pub fn matches(&self, candidate: &str) -> bool {
        self.value == candidate
    }
}
