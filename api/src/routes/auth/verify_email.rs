//! Handler for POST /api/auth/verify-email

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthSuccessResponse, VerifyEmailRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;

/// Verifies an email address with a 4-digit one-time code and logs the
/// account in.
///
/// A correct code is consumed by this call; a wrong code leaves the stored
/// code intact so the user can retry within its 5-minute lifetime.
///
/// # Responses
/// - 200 OK: email verified, session token returned
/// - 400 Bad Request: missing, expired, or wrong code
/// - 404 Not Found: no account for this email
pub async fn verify_email<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
    request: web::Json<VerifyEmailRequest>,
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
        .verify_email(&request.email, &request.code)
        .await
    {
        Ok(auth) => {
            HttpResponse::Ok().json(AuthSuccessResponse::new("Email verified successfully!", auth))
        }
        Err(error) => handle_domain_error(error),
    }
}
