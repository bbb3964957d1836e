//! Handler for POST /api/auth/signup

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthSuccessResponse, SignupRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;

/// Registers a new account and logs it in immediately.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jane@example.com",
///     "password": "secret",
///     "name": "Jane Doe",
///     "role": "employee" | "employer" | "management",
///     "designation": "optional title"
/// }
/// ```
///
/// # Responses
/// - 201 Created: account created, session token returned
/// - 400 Bad Request: invalid request data or email already registered
pub async fn signup<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
    request: web::Json<SignupRequest>,
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

    let request = request.into_inner();
    match state
        .auth_service
        .signup(
            &request.email,
            &request.password,
            &request.name,
            request.role,
            request.designation,
        )
        .await
    {
        Ok(auth) => HttpResponse::Created()
            .json(AuthSuccessResponse::new("Account created successfully", auth)),
        Err(error) => handle_domain_error(error),
    }
}
