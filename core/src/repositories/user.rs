//! User repository trait defining the credential store interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for [`User`] entities
///
/// Email uniqueness is enforced here: `create` must reject a user whose email
/// is already present.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their exact email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by the username derived from their display name
    /// (lowercase, whitespace collapsed to underscores)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// Fails with `AuthError::DuplicateEmail` when the email is taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user record
    ///
    /// Fails with a not-found error when the user does not exist.
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user; returns `false` when no such user existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List every user
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Check whether a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
