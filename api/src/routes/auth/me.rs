//! Handler for GET /api/auth/me

use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;

/// Returns the authenticated caller's account, without the password hash.
pub async fn me<U, J, A, E, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, J, A, E, S>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    match state.auth_service.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(user.to_public()),
        Err(error) => handle_domain_error(error),
    }
}
