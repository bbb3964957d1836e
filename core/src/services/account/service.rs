//! Account management service used by administrator endpoints.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Request to create a member account on behalf of an administrator
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
    pub designation: Option<String>,
}

/// Service for administrator-driven account management
///
/// All state transitions record who acted and when; the administrator
/// account itself can never be restricted or removed.
pub struct AccountService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> AccountService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// List member accounts (employees and employers)
    pub async fn list_members(&self) -> DomainResult<Vec<User>> {
        let users = self.user_repository.list().await?;
        Ok(users
            .into_iter()
            .filter(|u| matches!(u.role, UserRole::Employee | UserRole::Employer))
            .collect())
    }

    /// Fetch a single member by id
    pub async fn get_member(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee"))
    }

    /// Create a member account on behalf of an administrator
    ///
    /// Unlike signup, no session token is issued for the new account.
    pub async fn add_member(&self, actor: Uuid, member: NewMember) -> DomainResult<User> {
        if self.user_repository.exists_by_email(&member.email).await? {
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = bcrypt::hash(&member.password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))?;

        let mut user = User::new(
            member.email,
            member.name,
            password_hash,
            member.role.unwrap_or(UserRole::Employee),
            member.designation,
        );
        user.added_by = Some(actor.to_string());

        let user = self.user_repository.create(user).await?;
        info!(user_id = %user.id, actor = %actor, "member account added");
        Ok(user)
    }

    /// Restrict a member so they can no longer log in
    pub async fn restrict_member(
        &self,
        actor: Uuid,
        id: Uuid,
        reason: Option<String>,
    ) -> DomainResult<User> {
        let mut user = self.get_member(id).await?;

        if user.is_admin() {
            return Err(AuthError::forbidden("Cannot restrict admin user").into());
        }

        user.restrict(actor, reason);
        let user = self.user_repository.update(user).await?;
        info!(user_id = %user.id, actor = %actor, "member restricted");
        Ok(user)
    }

    /// Lift a restriction and re-activate a member account
    pub async fn activate_member(&self, actor: Uuid, id: Uuid) -> DomainResult<User> {
        let mut user = self.get_member(id).await?;

        user.activate(actor);
        let user = self.user_repository.update(user).await?;
        info!(user_id = %user.id, actor = %actor, "member activated");
        Ok(user)
    }

    /// Permanently remove a member account; returns the removed user's name
    pub async fn remove_member(&self, actor: Uuid, id: Uuid) -> DomainResult<String> {
        let user = self.get_member(id).await?;

        if user.is_admin() {
            return Err(AuthError::forbidden("Cannot remove admin user").into());
        }

        self.user_repository.delete(id).await?;
        info!(user_id = %id, actor = %actor, "member removed");
        Ok(user.name)
    }
}
