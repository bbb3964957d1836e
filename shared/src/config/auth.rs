//! Authentication and authorization configuration

use std::env;

/// Authentication configuration: JWT signing, one-time token lifetimes, and
/// the bootstrap administrator account.
///
/// The signing secret and administrator credentials are capabilities injected
/// at process start; the defaults exist for local development only.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,

    /// Session token lifetime in hours
    pub token_expiry_hours: i64,

    /// Username accepted by the administrator login bypass
    pub admin_username: String,

    /// Password accepted by the administrator login bypass
    pub admin_password: String,

    /// Email address of the bootstrap administrator account
    pub admin_email: String,

    /// Display name of the bootstrap administrator account
    pub admin_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("job-portal-secret-key-2024"),
            token_expiry_hours: 24,
            admin_username: String::from("admin"),
            admin_password: String::from("admin"),
            admin_email: String::from("admin@jobportal.com"),
            admin_name: String::from("System Administrator"),
        }
    }
}

impl AuthConfig {
    /// Load authentication configuration from environment variables
    ///
    /// Recognized variables: `JWT_SECRET`, `ADMIN_USERNAME`, `ADMIN_PASSWORD`,
    /// `ADMIN_EMAIL`, `ADMIN_NAME`. Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_expiry_hours: defaults.token_expiry_hours,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_name: env::var("ADMIN_NAME").unwrap_or(defaults.admin_name),
        }
    }

    /// Check if the default signing secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == AuthConfig::default().jwt_secret
    }
}
