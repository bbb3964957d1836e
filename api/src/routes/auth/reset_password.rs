//! Handlers for POST /api/auth/reset-password and
//! GET /api/auth/verify-reset-token

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{ResetPasswordRequest, TokenValidityResponse, VerifyResetTokenQuery};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use jp_core::errors::{DomainError, LedgerError};
use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;
use jp_shared::types::response::MessageResponse;

/// Completes a password reset with a one-time reset token.
///
/// The password policy (at least 8 characters, uppercase, lowercase, digit,
/// and symbol) is enforced before the token is consumed. Existing session
/// tokens are not invalidated; they expire naturally.
///
/// # Responses
/// - 200 OK: password replaced
/// - 400 Bad Request: weak password, or missing/expired/wrong token
/// - 404 Not Found: no account for this email
pub async fn reset_password<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .auth_service
        .reset_password(&request.email, &request.token, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "Password reset successful. Please login with your new password.",
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// Pre-flight check of a reset token, used by the client before showing the
/// reset form. Never consumes the token.
pub async fn verify_reset_token<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
    query: web::Query<VerifyResetTokenQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    let (token, email) = match (&query.token, &query.email) {
        (Some(token), Some(email)) => (token, email),
        _ => {
            return HttpResponse::BadRequest()
                .json(TokenValidityResponse::invalid("Token and email are required"))
        }
    };

    match state.auth_service.verify_reset_token(email, token).await {
        Ok(()) => HttpResponse::Ok().json(TokenValidityResponse::valid()),
        Err(DomainError::Ledger(LedgerError::NotFound)) => HttpResponse::Ok().json(
            TokenValidityResponse::invalid("Reset token not found or already used"),
        ),
        Err(DomainError::Ledger(LedgerError::Expired)) => {
            HttpResponse::Ok().json(TokenValidityResponse::invalid("Reset token has expired"))
        }
        Err(DomainError::Ledger(LedgerError::Mismatch)) => {
            HttpResponse::Ok().json(TokenValidityResponse::invalid("Invalid reset token"))
        }
        Err(error) => handle_domain_error(error),
    }
}
