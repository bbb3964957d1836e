//! Job posting route handlers.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::job::{CreateJobRequest, JobListQuery, JobResponse, UpdateJobRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::job::{JobChanges, JobFilter, NewJob};
use jp_core::services::ledger::TokenStoreTrait;
use jp_shared::types::response::MessageResponse;

/// POST /api/jobs - create a job posting (employers only)
pub async fn create_job<U, J, A, E, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, J, A, E, S>>,
    request: web::Json<CreateJobRequest>,
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
    let new_job = NewJob {
        title: request.title,
        description: request.description,
        requirements: request
            .requirements
            .map(|r| r.into_vec())
            .unwrap_or_default(),
        location: request.location,
        salary: request.salary,
        job_type: request.job_type,
        category: request.category,
    };

    match state
        .job_service
        .post_job(auth.user_id, auth.role, new_job)
        .await
    {
        Ok(job) => HttpResponse::Created().json(JobResponse {
            message: String::from("Job posted successfully"),
            job,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/jobs - list postings with optional filters, newest first
///
/// Query parameters: `status=active`, `category`, `search` (case-insensitive
/// over title and description).
pub async fn list_jobs<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
    query: web::Query<JobListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    let query = query.into_inner();
    let filter = JobFilter {
        active_only: query.status.as_deref() == Some("active"),
        category: query.category,
        search: query.search,
    };

    match state.job_service.list_jobs(filter).await {
        Ok(jobs) => HttpResponse::Ok().json(jobs),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/jobs/{id} - fetch a single posting
pub async fn get_job<U, J, A, E, S>(
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
    match state.job_service.get_job(path.into_inner()).await {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/jobs/{id} - update a posting (owning employer only)
pub async fn update_job<U, J, A, E, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, J, A, E, S>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateJobRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    let request = request.into_inner();
    let changes = JobChanges {
        title: request.title,
        description: request.description,
        requirements: request.requirements.map(|r| r.into_vec()),
        location: request.location,
        salary: request.salary,
        job_type: request.job_type,
        category: request.category,
        status: request.status,
    };

    match state
        .job_service
        .update_job(auth.user_id, path.into_inner(), changes)
        .await
    {
        Ok(job) => HttpResponse::Ok().json(JobResponse {
            message: String::from("Job updated successfully"),
            job,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/jobs/{id} - delete a posting (owning employer only)
pub async fn delete_job<U, J, A, E, S>(
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
        .job_service
        .delete_job(auth.user_id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Job deleted successfully")),
        Err(error) => handle_domain_error(error),
    }
}
