//! Integration tests for the account lifecycle, exercising the auth service
//! against the real in-memory infrastructure.

use std::sync::Arc;

use jp_core::domain::entities::one_time_token::TokenKind;
use jp_core::domain::entities::user::UserRole;
use jp_core::errors::{AuthError, DomainError, ValidationError};
use jp_core::repositories::UserRepository;
use jp_core::services::auth::{AuthService, AuthServiceConfig};
use jp_core::services::ledger::OneTimeTokenLedger;
use jp_core::services::token::{TokenService, TokenServiceConfig};
use jp_infra::cache::InMemoryTokenStore;
use jp_infra::email::ConsoleEmailService;
use jp_infra::storage::InMemoryUserRepository;

struct TestStack {
    auth_service: AuthService<InMemoryUserRepository, ConsoleEmailService, InMemoryTokenStore>,
    user_repository: Arc<InMemoryUserRepository>,
    email_service: Arc<ConsoleEmailService>,
    token_service: Arc<TokenService>,
    /// Handle onto the verification-code store, to read issued codes
    code_store: InMemoryTokenStore,
    /// Handle onto the reset-token store, to read issued tokens
    reset_store: InMemoryTokenStore,
}

fn stack() -> TestStack {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let email_service = Arc::new(ConsoleEmailService::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new("test-secret")));

    let code_store = InMemoryTokenStore::new();
    let reset_store = InMemoryTokenStore::new();

    let auth_service = AuthService::new(
        user_repository.clone(),
        email_service.clone(),
        Arc::new(OneTimeTokenLedger::new(
            code_store.clone(),
            TokenKind::VerificationCode,
        )),
        Arc::new(OneTimeTokenLedger::new(
            reset_store.clone(),
            TokenKind::ResetToken,
        )),
        token_service.clone(),
        AuthServiceConfig::default(),
    );

    TestStack {
        auth_service,
        user_repository,
        email_service,
        token_service,
        code_store,
        reset_store,
    }
}

async fn read_stored_token(store: &InMemoryTokenStore, email: &str) -> String {
    use jp_core::services::ledger::TokenStoreTrait;
    store
        .get(email)
        .await
        .unwrap()
        .expect("a token should be stored")
        .value
}

#[actix_rt::test]
async fn test_signup_then_login() {
    let stack = stack();

    let signup = stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();
    assert_eq!(signup.user.role, UserRole::Employee);
    assert!(signup.user.is_verified);

    let login = stack
        .auth_service
        .login("jane@example.com", "Secret1!")
        .await
        .unwrap();
    assert_eq!(login.user.id, signup.user.id);

    // The session token decodes back to the same identity and role
    let claims = stack.token_service.verify(&login.token).unwrap();
    assert_eq!(claims.user_id().unwrap(), signup.user.id);
    assert_eq!(claims.email, "jane@example.com");
    assert_eq!(claims.role, UserRole::Employee);
}

#[actix_rt::test]
async fn test_signup_rejects_malformed_email() {
    let stack = stack();

    let err = stack
        .auth_service
        .signup("not-an-email", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidEmail)
    ));
}

#[actix_rt::test]
async fn test_signup_duplicate_email_rejected() {
    let stack = stack();

    stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();

    let err = stack
        .auth_service
        .signup("jane@example.com", "Other1!", "Other Jane", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::DuplicateEmail)));
}

#[actix_rt::test]
async fn test_login_by_username_slug() {
    let stack = stack();

    stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();

    let login = stack.auth_service.login("jane_doe", "Secret1!").await.unwrap();
    assert_eq!(login.user.email, "jane@example.com");
}

#[actix_rt::test]
async fn test_login_wrong_password_rejected() {
    let stack = stack();

    stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();

    let err = stack
        .auth_service
        .login("jane@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[actix_rt::test]
async fn test_restricted_account_cannot_login_even_with_correct_password() {
    let stack = stack();

    let signup = stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();

    let mut user = stack
        .user_repository
        .find_by_id(signup.user.id)
        .await
        .unwrap()
        .unwrap();
    user.restrict(uuid::Uuid::new_v4(), Some("test".to_string()));
    stack.user_repository.update(user).await.unwrap();

    let err = stack
        .auth_service
        .login("jane@example.com", "Secret1!")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::AccountRestricted)
    ));
}

#[actix_rt::test]
async fn test_unverified_account_gets_reverification_hint() {
    let stack = stack();

    let signup = stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();

    let mut user = stack
        .user_repository
        .find_by_id(signup.user.id)
        .await
        .unwrap()
        .unwrap();
    user.is_verified = false;
    stack.user_repository.update(user).await.unwrap();

    let err = stack
        .auth_service
        .login("jane@example.com", "Secret1!")
        .await
        .unwrap_err();
    match err {
        DomainError::Auth(AuthError::EmailNotVerified { email }) => {
            assert_eq!(email, "jane@example.com");
        }
        other => panic!("expected EmailNotVerified, got {:?}", other),
    }
}

#[actix_rt::test]
async fn test_admin_bypass_on_fresh_system() {
    let stack = stack();

    // No users exist at all, yet admin/admin authenticates
    let login = stack.auth_service.login("admin", "admin").await.unwrap();
    assert_eq!(login.user.role, UserRole::Admin);
    assert_eq!(login.user.email, "admin@jobportal.com");

    // The bootstrap account was created lazily, exactly once
    let second = stack.auth_service.login("ADMIN", "admin").await.unwrap();
    assert_eq!(second.user.id, login.user.id);
}

#[actix_rt::test]
async fn test_verification_code_flow() {
    let stack = stack();

    stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();
    let mut user = stack
        .user_repository
        .find_by_email("jane@example.com")
        .await
        .unwrap()
        .unwrap();
    user.is_verified = false;
    stack.user_repository.update(user).await.unwrap();

    // Request a code twice; only the second one is live
    stack
        .auth_service
        .resend_verification("jane@example.com")
        .await
        .unwrap();
    let first_code = read_stored_token(&stack.code_store, "jane@example.com").await;

    stack
        .auth_service
        .resend_verification("jane@example.com")
        .await
        .unwrap();
    let second_code = read_stored_token(&stack.code_store, "jane@example.com").await;

    if first_code != second_code {
        let err = stack
            .auth_service
            .verify_email("jane@example.com", &first_code)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Ledger(jp_core::errors::LedgerError::Mismatch)
        ));
    }

    let auth = stack
        .auth_service
        .verify_email("jane@example.com", &second_code)
        .await
        .unwrap();
    assert!(auth.user.is_verified);

    // The code was consumed; replaying it fails
    let err = stack
        .auth_service
        .verify_email("jane@example.com", &second_code)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Ledger(jp_core::errors::LedgerError::NotFound)
    ));

    // Two emails were dispatched, one per issued code
    assert_eq!(stack.email_service.sent_count(), 2);
}

#[actix_rt::test]
async fn test_resend_for_verified_account_sends_nothing() {
    let stack = stack();

    stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();

    let outcome = stack
        .auth_service
        .resend_verification("jane@example.com")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        jp_core::services::auth::ResendOutcome::AlreadyVerified
    );
    assert_eq!(stack.email_service.sent_count(), 0);
}

#[actix_rt::test]
async fn test_forgot_password_is_silent_for_unknown_email() {
    let stack = stack();

    // Unknown email still reports success and sends nothing
    stack
        .auth_service
        .forgot_password("nobody@example.com")
        .await
        .unwrap();
    assert_eq!(stack.email_service.sent_count(), 0);
}

#[actix_rt::test]
async fn test_password_reset_flow() {
    let stack = stack();

    stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();

    stack
        .auth_service
        .forgot_password("jane@example.com")
        .await
        .unwrap();
    assert_eq!(stack.email_service.sent_count(), 1);

    let token = read_stored_token(&stack.reset_store, "jane@example.com").await;
    assert_eq!(token.len(), 64);

    // Weak password is rejected before the token is touched
    let err = stack
        .auth_service
        .reset_password("jane@example.com", &token, "abc12345")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::WeakPassword)
    ));

    // The token survived the weak-password attempt
    stack
        .auth_service
        .verify_reset_token("jane@example.com", &token)
        .await
        .unwrap();

    stack
        .auth_service
        .reset_password("jane@example.com", &token, "Abc12345!")
        .await
        .unwrap();

    // Old password no longer authenticates, the new one does
    let err = stack
        .auth_service
        .login("jane@example.com", "Secret1!")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    stack
        .auth_service
        .login("jane@example.com", "Abc12345!")
        .await
        .unwrap();

    // The reset token was consumed
    let err = stack
        .auth_service
        .reset_password("jane@example.com", &token, "Abc12345!")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidResetToken)
    ));
}

#[actix_rt::test]
async fn test_wrong_reset_token_does_not_consume_entry() {
    let stack = stack();

    stack
        .auth_service
        .signup("jane@example.com", "Secret1!", "Jane Doe", None, None)
        .await
        .unwrap();
    stack
        .auth_service
        .forgot_password("jane@example.com")
        .await
        .unwrap();
    let token = read_stored_token(&stack.reset_store, "jane@example.com").await;

    let err = stack
        .auth_service
        .reset_password("jane@example.com", "0000", "Abc12345!")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidResetToken)
    ));

    // The legitimate token still works
    stack
        .auth_service
        .reset_password("jane@example.com", &token, "Abc12345!")
        .await
        .unwrap();
}
