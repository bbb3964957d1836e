//! Authentication service implementation.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use jp_shared::utils::url::encode_query_component;
use jp_shared::utils::validation::{is_valid_email, PasswordRequirements};

use crate::domain::entities::one_time_token::VERIFICATION_CODE_TTL_MINUTES;
use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::email::EmailServiceTrait;
use crate::services::ledger::{OneTimeTokenLedger, TokenStoreTrait};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Outcome of a resend-verification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendOutcome {
    /// The account is already verified; nothing was sent
    AlreadyVerified,
    /// A fresh code was issued and dispatched
    CodeSent { expires_in_minutes: i64 },
}

/// Authentication service for the complete account lifecycle
///
/// Orchestrates the credential store, the two one-time token ledgers, the
/// session issuer, and the notification channel.
pub struct AuthService<U, E, S>
where
    U: UserRepository,
    E: EmailServiceTrait,
    S: TokenStoreTrait,
{
    /// Credential store
    user_repository: Arc<U>,
    /// Outbound notification channel
    email_service: Arc<E>,
    /// Ledger of email verification codes
    verification_codes: Arc<OneTimeTokenLedger<S>>,
    /// Ledger of password reset tokens
    reset_tokens: Arc<OneTimeTokenLedger<S>>,
    /// Session issuer
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, E, S> AuthService<U, E, S>
where
    U: UserRepository,
    E: EmailServiceTrait,
    S: TokenStoreTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        email_service: Arc<E>,
        verification_codes: Arc<OneTimeTokenLedger<S>>,
        reset_tokens: Arc<OneTimeTokenLedger<S>>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            email_service,
            verification_codes,
            reset_tokens,
            token_service,
            config,
        }
    }

    /// Register a new account and log it in
    ///
    /// Accounts are created active and verified, and a session token is
    /// issued immediately.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Option<UserRole>,
        designation: Option<String>,
    ) -> DomainResult<AuthResponse> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = hash_password(password)?;
        let user = User::new(
            email.to_string(),
            name.to_string(),
            password_hash,
            role.unwrap_or(UserRole::Employee),
            designation,
        );

        let user = self.user_repository.create(user).await?;
        info!(user_id = %user.id, role = %user.role, "account created");

        self.issue_session(&user)
    }

    /// Authenticate with an email address or a derived username
    ///
    /// Two paths exist. The administrator bypass accepts the configured
    /// username/password pair and lazily creates the bootstrap account,
    /// skipping the stored-hash check entirely. The standard path resolves
    /// the account, rejects restricted and unverified accounts, and then
    /// checks the password.
    pub async fn login(&self, identifier: &str, password: &str) -> DomainResult<AuthResponse> {
        let is_email = identifier.contains('@');

        // Administrator bypass comes before any account lookup
        if !is_email
            && identifier.eq_ignore_ascii_case(&self.config.admin_username)
            && password == self.config.admin_password
        {
            let admin = self.ensure_admin().await?;
            info!(user_id = %admin.id, "administrator login");
            return self.issue_session(&admin);
        }

        let user = if is_email {
            self.user_repository.find_by_email(identifier).await?
        } else {
            self.user_repository
                .find_by_username(&identifier.to_lowercase())
                .await?
        };

        let user = user.ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AuthError::AccountRestricted.into());
        }

        if !user.is_verified {
            return Err(AuthError::EmailNotVerified {
                email: user.email.clone(),
            }
            .into());
        }

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "login");
        self.issue_session(&user)
    }

    /// Verify an email address with a one-time code and log the account in
    pub async fn verify_email(&self, email: &str, code: &str) -> DomainResult<AuthResponse> {
        self.verification_codes.validate(email, code).await?;

        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        user.verify();
        let user = self.user_repository.update(user).await?;
        info!(user_id = %user.id, "email verified");

        self.issue_session(&user)
    }

    /// Issue a fresh verification code for an unverified account
    pub async fn resend_verification(&self, email: &str) -> DomainResult<ResendOutcome> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if user.is_verified {
            return Ok(ResendOutcome::AlreadyVerified);
        }

        let code = self.verification_codes.issue(email).await?;
        if let Err(e) = self.email_service.send_verification_code(email, &code).await {
            warn!(error = %e, "failed to deliver verification code");
        }

        Ok(ResendOutcome::CodeSent {
            expires_in_minutes: VERIFICATION_CODE_TTL_MINUTES,
        })
    }

    /// Start a password reset
    ///
    /// Always succeeds from the caller's point of view. Whether the email
    /// exists is never revealed; a reset token is issued and dispatched only
    /// when it does.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        if let Some(user) = self.user_repository.find_by_email(email).await? {
            let token = self.reset_tokens.issue(email).await?;
            let reset_link = format!(
                "{}/reset-password.html?token={}&email={}",
                self.config.client_url,
                token,
                encode_query_component(email),
            );

            if let Err(e) = self
                .email_service
                .send_password_reset(email, &user.name, &reset_link)
                .await
            {
                warn!(error = %e, "failed to deliver password reset email");
            }
        }

        Ok(())
    }

    /// Complete a password reset with a one-time token
    ///
    /// The password policy is enforced before the token is consumed, so a
    /// weak password does not burn a valid token. Existing session tokens
    /// stay valid until their natural expiry.
    pub async fn reset_password(
        &self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !PasswordRequirements::check(new_password).all_satisfied() {
            return Err(ValidationError::WeakPassword.into());
        }

        self.reset_tokens
            .validate(email, token)
            .await
            .map_err(|_| AuthError::InvalidResetToken)?;

        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        user.set_password_hash(hash_password(new_password)?);
        self.user_repository.update(user).await?;
        info!(email = %email, "password reset completed");

        Ok(())
    }

    /// Pre-flight check of a reset token without consuming it
    pub async fn verify_reset_token(&self, email: &str, token: &str) -> DomainResult<()> {
        self.reset_tokens
            .check(email, token)
            .await
            .map_err(DomainError::from)
    }

    /// Fetch the current user for an authenticated session
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Guarantee the bootstrap administrator account exists
    ///
    /// Called at startup and lazily from the login bypass.
    pub async fn ensure_admin(&self) -> DomainResult<User> {
        if let Some(admin) = self
            .user_repository
            .find_by_email(&self.config.admin_email)
            .await?
        {
            return Ok(admin);
        }

        let mut admin = User::new(
            self.config.admin_email.clone(),
            self.config.admin_name.clone(),
            hash_password(&self.config.admin_password)?,
            UserRole::Admin,
            None,
        );
        admin.added_by = Some(String::from("system"));

        let admin = self.user_repository.create(admin).await?;
        info!(email = %admin.email, "default admin user created");
        Ok(admin)
    }

    fn issue_session(&self, user: &User) -> DomainResult<AuthResponse> {
        let token = self.token_service.issue(user)?;
        Ok(AuthResponse::new(
            token,
            self.token_service.expires_in_seconds(),
            user.to_public(),
        ))
    }
}

/// Hash a password with bcrypt and a per-record salt
fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))
}

/// Constant-time-safe comparison against a stored bcrypt hash
fn verify_password(password: &str, password_hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| DomainError::internal(format!("password verification failed: {e}")))
}
