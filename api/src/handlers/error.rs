//! Domain error to HTTP response mapping.
//!
//! Every failure is handled here at the handler boundary; nothing is allowed
//! to crash the process. The user-facing messages preserve the wording
//! clients already depend on.

use actix_web::HttpResponse;
use serde_json::json;

use jp_core::errors::{AuthError, DomainError, LedgerError, TokenError, ValidationError};
use jp_shared::types::response::ErrorBody;

fn bad_request(error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody::new(error, message))
}

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::warn!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::DuplicateEmail => {
                bad_request("duplicate_email", "User already exists with this email")
            }
            AuthError::InvalidCredentials => {
                bad_request("invalid_credentials", "Invalid email/username or password")
            }
            AuthError::AccountRestricted => HttpResponse::Forbidden().json(ErrorBody::new(
                "account_restricted",
                "Your account has been restricted. Please contact admin.",
            )),
            AuthError::EmailNotVerified { email } => {
                HttpResponse::Forbidden().json(
                    ErrorBody::new(
                        "email_not_verified",
                        "Please verify your email before logging in. \
                         Check your email for the verification code.",
                    )
                    .with_detail("requires_verification", json!(true))
                    .with_detail("email", json!(email)),
                )
            }
            AuthError::InvalidResetToken => bad_request(
                "invalid_reset_token",
                "Invalid or expired reset token. Please request a new password reset.",
            ),
            AuthError::Forbidden { reason } => {
                HttpResponse::Forbidden().json(ErrorBody::new("forbidden", reason))
            }
        },

        DomainError::Token(token_error) => match token_error {
            TokenError::GenerationFailed => {
                log::error!("Token generation failed");
                internal_error()
            }
            _ => HttpResponse::Forbidden().json(ErrorBody::new("invalid_token", "Invalid token.")),
        },

        DomainError::Ledger(ledger_error) => match ledger_error {
            LedgerError::NotFound => bad_request(
                "code_not_found",
                "No verification code found. Please request a new code.",
            ),
            LedgerError::Expired => bad_request(
                "code_expired",
                "Verification code has expired. Please request a new code.",
            ),
            LedgerError::Mismatch => bad_request(
                "invalid_code",
                "Invalid verification code. Please try again.",
            ),
            LedgerError::Storage(message) => {
                log::error!("Token storage failure: {}", message);
                internal_error()
            }
        },

        DomainError::ValidationErr(validation_error) => match validation_error {
            ValidationError::WeakPassword => bad_request(
                "weak_password",
                "Password does not meet requirements. It must be at least 8 characters \
                 with uppercase, lowercase, number, and special character.",
            ),
            other => bad_request("validation_error", other.to_string()),
        },

        DomainError::NotFound { resource } => HttpResponse::NotFound()
            .json(ErrorBody::new("not_found", format!("{resource} not found"))),

        DomainError::BusinessRule { message } => bad_request("business_rule", message),

        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error()
        }
    }
}

/// Convert request body validation failures into a 400 response with
/// field-level details
pub fn handle_validation_errors(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut body = ErrorBody::new("validation_error", "Invalid request data");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.with_detail(field.to_string(), json!(messages));
    }
    HttpResponse::BadRequest().json(body)
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ErrorBody::new("internal_error", "An internal error occurred"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_duplicate_email_maps_to_400() {
        let response = handle_domain_error(AuthError::DuplicateEmail.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_restricted_account_maps_to_403() {
        let response = handle_domain_error(AuthError::AccountRestricted.into());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::not_found("Job"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_ledger_mismatch_maps_to_400() {
        let response = handle_domain_error(LedgerError::Mismatch.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = handle_domain_error(DomainError::internal("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
