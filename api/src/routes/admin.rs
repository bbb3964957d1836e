//! Administrator route handlers for member management.
//!
//! Every route in this module sits behind the admin-gated middleware; the
//! handlers can assume the caller's role is already verified.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::admin::{
    AddMemberRequest, MemberCreatedResponse, MemberDetailResponse, MemberStatusResponse,
    MemberStatusSummary, RestrictMemberRequest,
};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::account::NewMember;
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;
use jp_shared::types::response::MessageResponse;

/// GET /api/admin/employees - list employee and employer accounts
pub async fn list_members<U, J, A, E, S>(
    state: web::Data<AppState<U, J, A, E, S>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    match state.account_service.list_members().await {
        Ok(members) => HttpResponse::Ok()
            .json(members.iter().map(|u| u.to_public()).collect::<Vec<_>>()),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/admin/employees/{id} - member detail with their applications
pub async fn get_member<U, J, A, E, S>(
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
    let id = path.into_inner();

    let user = match state.account_service.get_member(id).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state.application_service.list_by_employee(id).await {
        Ok(applications) => HttpResponse::Ok().json(MemberDetailResponse {
            user: user.to_public(),
            applications,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/admin/employees - create a member account
pub async fn add_member<U, J, A, E, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, J, A, E, S>>,
    request: web::Json<AddMemberRequest>,
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
    let member = NewMember {
        name: request.name,
        email: request.email,
        password: request.password,
        role: request.role,
        designation: request.designation,
    };

    match state.account_service.add_member(auth.user_id, member).await {
        Ok(user) => HttpResponse::Created().json(MemberCreatedResponse {
            message: String::from("Employee added successfully"),
            user: user.to_public(),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/admin/employees/{id}/restrict - deactivate a member account
pub async fn restrict_member<U, J, A, E, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, J, A, E, S>>,
    path: web::Path<Uuid>,
    request: web::Json<RestrictMemberRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    let reason = request.into_inner().restrict_reason;

    match state
        .account_service
        .restrict_member(auth.user_id, path.into_inner(), reason)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(MemberStatusResponse {
            message: String::from("Employee has been restricted"),
            user: MemberStatusSummary {
                id: user.id,
                name: user.name,
                status: user.status,
            },
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/admin/employees/{id}/activate - re-activate a member account
pub async fn activate_member<U, J, A, E, S>(
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
        .account_service
        .activate_member(auth.user_id, path.into_inner())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(MemberStatusResponse {
            message: String::from("Employee has been activated"),
            user: MemberStatusSummary {
                id: user.id,
                name: user.name,
                status: user.status,
            },
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/admin/employees/{id} - remove a member account
pub async fn remove_member<U, J, A, E, S>(
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
        .account_service
        .remove_member(auth.user_id, path.into_inner())
        .await
    {
        Ok(name) => HttpResponse::Ok().json(MessageResponse::new(format!(
            "Employee {} has been removed",
            name
        ))),
        Err(error) => handle_domain_error(error),
    }
}
