//! Authentication request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use jp_core::domain::entities::user::{PublicUser, UserRole};
use jp_core::domain::value_objects::AuthResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: Option<UserRole>,
    pub designation: Option<String>,
}

/// Login accepts either an email address or a username in the `email` field;
/// the admin bypass uses the username form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(equal = 4))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendVerificationRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Query parameters for the reset-token pre-flight check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResetTokenQuery {
    pub token: Option<String>,
    pub email: Option<String>,
}

/// Successful authentication response (signup, login, verify)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSuccessResponse {
    pub message: String,
    pub token: String,
    pub expires_in: i64,
    pub user: PublicUser,
}

impl AuthSuccessResponse {
    pub fn new(message: impl Into<String>, auth: AuthResponse) -> Self {
        Self {
            message: message.into(),
            token: auth.token,
            expires_in: auth.expires_in,
            user: auth.user,
        }
    }
}

/// Response to a resend-verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendVerificationResponse {
    pub message: String,
    pub expires_in: String,
}

/// Response to the reset-token pre-flight check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenValidityResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenValidityResponse {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}
