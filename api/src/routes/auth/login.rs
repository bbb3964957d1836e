//! Handler for POST /api/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthSuccessResponse, LoginRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use jp_core::domain::entities::user::UserRole;
use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;

/// Authenticates with an email address or username and returns a session
/// token.
///
/// The `email` field also accepts a username; the fixed administrator
/// username/password pair always authenticates, lazily creating the
/// administrator account on a fresh system.
///
/// # Responses
/// - 200 OK: session token and user returned
/// - 400 Bad Request: unknown account or wrong password
/// - 403 Forbidden: account restricted, or email not yet verified
///   (response carries `requires_verification` and the email)
pub async fn login<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(auth) => {
            let message = if auth.user.role == UserRole::Admin {
                "Admin login successful"
            } else {
                "Login successful"
            };
            HttpResponse::Ok().json(AuthSuccessResponse::new(message, auth))
        }
        Err(error) => handle_domain_error(error),
    }
}
