//! Configuration for the token service

use crate::domain::entities::token::SESSION_TOKEN_EXPIRY_HOURS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Session token expiry in hours
    pub token_expiry_hours: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-please-change-in-production"),
            token_expiry_hours: SESSION_TOKEN_EXPIRY_HOURS,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}
