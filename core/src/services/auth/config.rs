//! Configuration for the authentication service

use jp_shared::config::{AuthConfig, ServerConfig};

/// Configuration for the authentication service
///
/// The administrator credentials power the login bypass and the lazily
/// created bootstrap account; they are injected capabilities, never
/// literals in the service code.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Username accepted by the administrator login bypass
    pub admin_username: String,
    /// Password accepted by the administrator login bypass
    pub admin_password: String,
    /// Email of the bootstrap administrator account
    pub admin_email: String,
    /// Display name of the bootstrap administrator account
    pub admin_name: String,
    /// Base URL used when building password reset links
    pub client_url: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self::from_configs(&AuthConfig::default(), &ServerConfig::default())
    }
}

impl AuthServiceConfig {
    /// Builds the service configuration from the shared config structs
    pub fn from_configs(auth: &AuthConfig, server: &ServerConfig) -> Self {
        Self {
            admin_username: auth.admin_username.clone(),
            admin_password: auth.admin_password.clone(),
            admin_email: auth.admin_email.clone(),
            admin_name: auth.admin_name.clone(),
            client_url: server.client_url.clone(),
        }
    }
}
