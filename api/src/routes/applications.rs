//! Application route handlers.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::application::{ApplicationResponse, UpdateApplicationRequest};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::application::ApplicationChanges;
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;

/// POST /api/jobs/{id}/apply - apply to a posting (employees only)
pub async fn apply<U, J, A, E, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, J, A, E, S>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    match state
        .application_service
        .apply(auth.user_id, auth.role, path.into_inner())
        .await
    {
        Ok(application) => HttpResponse::Created().json(ApplicationResponse {
            message: String::from("Application submitted successfully"),
            application,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/applications - list applications visible to the caller
///
/// Employees see their own applications, employers see applications to their
/// postings; each entry carries the job it targets.
pub async fn list_applications<U, J, A, E, S>(
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
    match state
        .application_service
        .list_for(auth.user_id, auth.role)
        .await
    {
        Ok(applications) => HttpResponse::Ok().json(applications),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/applications/{id} - update review state (owning employer only)
pub async fn update_application<U, J, A, E, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, J, A, E, S>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateApplicationRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    let request = request.into_inner();
    let changes = ApplicationChanges {
        status: request.status,
        progress: request.progress,
        notes: request.notes,
    };

    match state
        .application_service
        .update_application(auth.user_id, path.into_inner(), changes)
        .await
    {
        Ok(application) => HttpResponse::Ok().json(ApplicationResponse {
            message: String::from("Application updated successfully"),
            application,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/progress - aggregate progress view (employees only)
pub async fn progress<U, J, A, E, S>(
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
    match state
        .application_service
        .progress_summary(auth.user_id, auth.role)
        .await
    {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(error) => handle_domain_error(error),
    }
}
