//! Application factory.
//!
//! Builds the actix-web application with all middleware and routes wired to
//! the shared services. Each route group declares its own authorization
//! requirement: the auth scope is public apart from `/me`, the admin scope
//! requires the admin role, and the job/application scopes require any
//! authenticated caller.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::auth::JwtAuth;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    forgot_password::forgot_password, login::login, me::me,
    resend_verification::resend_verification, reset_password::reset_password,
    reset_password::verify_reset_token, signup::signup, verify_email::verify_email,
};
use crate::routes::{admin, applications, jobs, AppState};

use jp_core::domain::entities::user::UserRole;
use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::ledger::TokenStoreTrait;
use jp_shared::types::response::ErrorBody;

/// Create and configure the application with all dependencies
pub fn create_app<U, J, A, E, S>(
    app_state: web::Data<AppState<U, J, A, E, S>>,
    client_url: &str,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: TokenStoreTrait + 'static,
{
    let token_service = app_state.token_service.clone();
    let cors = create_cors(client_url);

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                // Account lifecycle
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<U, J, A, E, S>))
                        .route("/login", web::post().to(login::<U, J, A, E, S>))
                        .route("/verify-email", web::post().to(verify_email::<U, J, A, E, S>))
                        .route(
                            "/resend-verification",
                            web::post().to(resend_verification::<U, J, A, E, S>),
                        )
                        .route(
                            "/forgot-password",
                            web::post().to(forgot_password::<U, J, A, E, S>),
                        )
                        .route(
                            "/reset-password",
                            web::post().to(reset_password::<U, J, A, E, S>),
                        )
                        .route(
                            "/verify-reset-token",
                            web::get().to(verify_reset_token::<U, J, A, E, S>),
                        )
                        .route(
                            "/me",
                            web::get()
                                .to(me::<U, J, A, E, S>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        ),
                )
                // Member management, admin role required
                .service(
                    web::scope("/admin")
                        .wrap(JwtAuth::require_role(
                            token_service.clone(),
                            UserRole::Admin,
                        ))
                        .route("/employees", web::get().to(admin::list_members::<U, J, A, E, S>))
                        .route("/employees", web::post().to(admin::add_member::<U, J, A, E, S>))
                        .route(
                            "/employees/{id}",
                            web::get().to(admin::get_member::<U, J, A, E, S>),
                        )
                        .route(
                            "/employees/{id}",
                            web::delete().to(admin::remove_member::<U, J, A, E, S>),
                        )
                        .route(
                            "/employees/{id}/restrict",
                            web::put().to(admin::restrict_member::<U, J, A, E, S>),
                        )
                        .route(
                            "/employees/{id}/activate",
                            web::put().to(admin::activate_member::<U, J, A, E, S>),
                        ),
                )
                // Job board, any authenticated caller
                .service(
                    web::scope("/jobs")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route("", web::post().to(jobs::create_job::<U, J, A, E, S>))
                        .route("", web::get().to(jobs::list_jobs::<U, J, A, E, S>))
                        .route("/{id}", web::get().to(jobs::get_job::<U, J, A, E, S>))
                        .route("/{id}", web::put().to(jobs::update_job::<U, J, A, E, S>))
                        .route("/{id}", web::delete().to(jobs::delete_job::<U, J, A, E, S>))
                        .route(
                            "/{id}/apply",
                            web::post().to(applications::apply::<U, J, A, E, S>),
                        ),
                )
                .service(
                    web::scope("/applications")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route(
                            "",
                            web::get().to(applications::list_applications::<U, J, A, E, S>),
                        )
                        .route(
                            "/{id}",
                            web::put().to(applications::update_application::<U, J, A, E, S>),
                        ),
                )
                .route(
                    "/progress",
                    web::get()
                        .to(applications::progress::<U, J, A, E, S>)
                        .wrap(JwtAuth::new(token_service)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "job-portal-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(
        "not_found",
        "The requested resource was not found",
    ))
}
