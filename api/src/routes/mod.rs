//! Route handlers.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod jobs;

use std::sync::Arc;

use jp_core::repositories::{ApplicationRepository, JobRepository, UserRepository};
use jp_core::services::account::AccountService;
use jp_core::services::application::ApplicationService;
use jp_core::services::auth::AuthService;
use jp_core::services::email::EmailServiceTrait;
use jp_core::services::job::JobService;
use jp_core::services::ledger::TokenStoreTrait;
use jp_core::services::token::TokenService;

/// Application state that holds the shared services
pub struct AppState<U, J, A, E, S>
where
    U: UserRepository,
    J: JobRepository,
    A: ApplicationRepository,
    E: EmailServiceTrait,
    S: TokenStoreTrait,
{
    pub auth_service: Arc<AuthService<U, E, S>>,
    pub account_service: Arc<AccountService<U>>,
    pub job_service: Arc<JobService<J, U, E>>,
    pub application_service: Arc<ApplicationService<A, J, U, E>>,
    pub token_service: Arc<TokenService>,
}
