use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::sync::Arc;

use jp_api::app::create_app;
use jp_api::routes::AppState;
use jp_core::domain::entities::one_time_token::TokenKind;
use jp_core::services::account::AccountService;
use jp_core::services::application::ApplicationService;
use jp_core::services::auth::{AuthService, AuthServiceConfig};
use jp_core::services::job::JobService;
use jp_core::services::ledger::OneTimeTokenLedger;
use jp_core::services::token::{TokenService, TokenServiceConfig};
use jp_infra::cache::InMemoryTokenStore;
use jp_infra::email::ConsoleEmailService;
use jp_infra::storage::{
    InMemoryApplicationRepository, InMemoryJobRepository, InMemoryUserRepository,
};
use jp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    if config.auth.is_using_default_secret() {
        warn!("Using the default JWT secret; set JWT_SECRET in production");
    }

    // Storage: process-local collections, dropped on restart
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let job_repository = Arc::new(InMemoryJobRepository::new());
    let application_repository = Arc::new(InMemoryApplicationRepository::new());

    // Notification channel (console delivery in this deployment)
    let email_service = Arc::new(ConsoleEmailService::new());

    // Two independent one-time token ledgers, each over its own store
    let verification_codes = Arc::new(OneTimeTokenLedger::new(
        InMemoryTokenStore::new(),
        TokenKind::VerificationCode,
    ));
    let reset_tokens = Arc::new(OneTimeTokenLedger::new(
        InMemoryTokenStore::new(),
        TokenKind::ResetToken,
    ));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: config.auth.jwt_secret.clone(),
        token_expiry_hours: config.auth.token_expiry_hours,
    }));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        email_service.clone(),
        verification_codes,
        reset_tokens,
        token_service.clone(),
        AuthServiceConfig::from_configs(&config.auth, &config.server),
    ));

    // Guarantee the bootstrap administrator exists before serving traffic
    auth_service
        .ensure_admin()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let account_service = Arc::new(AccountService::new(user_repository.clone()));
    let job_service = Arc::new(JobService::new(
        job_repository.clone(),
        user_repository.clone(),
        email_service.clone(),
    ));
    let application_service = Arc::new(ApplicationService::new(
        application_repository,
        job_repository,
        user_repository,
        email_service,
    ));

    let state = web::Data::new(AppState {
        auth_service,
        account_service,
        job_service,
        application_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("Job Portal server running on http://{}", bind_address);

    let client_url = config.server.client_url.clone();
    HttpServer::new(move || create_app(state.clone(), &client_url))
        .bind(&bind_address)?
        .run()
        .await
}
