//! Handler for POST /api/auth/resend-verification

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{ResendVerificationRequest, ResendVerificationResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::auth::ResendOutcome;
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;
use jp_shared::types::response::MessageResponse;

/// Issues a fresh verification code for an unverified account.
///
/// Reissuing overwrites any previous code for the same email; only the
/// newest code validates afterwards.
///
/// # Responses
/// - 200 OK: code sent, or the account was already verified
/// - 404 Not Found: no account for this email
pub async fn resend_verification<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
    request: web::Json<ResendVerificationRequest>,
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

    match state.auth_service.resend_verification(&request.email).await {
        Ok(ResendOutcome::AlreadyVerified) => HttpResponse::Ok().json(MessageResponse::new(
            "Email is already verified. You can login now.",
        )),
        Ok(ResendOutcome::CodeSent { expires_in_minutes }) => {
            HttpResponse::Ok().json(ResendVerificationResponse {
                message: String::from("A new verification code has been sent to your email"),
                expires_in: format!("{} minutes", expires_in_minutes),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
