//! Handler for POST /api/auth/forgot-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::ForgotPasswordRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;
use jp_shared::types::response::MessageResponse;

/// Starts a password reset.
///
/// The response is identical whether or not the email is registered, so the
/// endpoint cannot be used to probe for accounts. When the account exists a
/// reset link is dispatched out-of-band.
pub async fn forgot_password<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
    request: web::Json<ForgotPasswordRequest>,
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

    match state.auth_service.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "If an account exists with this email, a password reset link has been sent",
        )),
        Err(error) => handle_domain_error(error),
    }
}
