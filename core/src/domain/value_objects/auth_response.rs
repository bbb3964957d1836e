//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::PublicUser;

/// Result of a successful authentication (signup, login, or verification)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Signed session token for API authentication
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    /// The authenticated user, without the password hash
    pub user: PublicUser,
}

impl AuthResponse {
    pub fn new(token: String, expires_in: i64, user: PublicUser) -> Self {
        Self {
            token,
            expires_in,
            user,
        }
    }
}
