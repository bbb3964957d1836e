//! User entity representing a registered account in the Job Portal system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jp_shared::utils::validation::username_from_name;

/// Role assigned to a user at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A candidate looking for work
    Employee,
    /// An account that posts jobs and reviews applications
    Employer,
    /// Company management (heads, CEOs)
    Management,
    /// Platform administrator
    Admin,
}

impl UserRole {
    /// Lowercase wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::Employer => "employer",
            UserRole::Management => "management",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual account state, kept alongside the `is_active` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Restricted,
}

/// User entity owned by the credential store
///
/// The password is stored only as a bcrypt hash and is never serialized into
/// API responses; handlers return [`PublicUser`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across all users
    pub email: String,

    /// Display name
    pub name: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Role assigned at creation
    pub role: UserRole,

    /// Optional job title / designation
    pub designation: Option<String>,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Whether the account is allowed to log in
    pub is_active: bool,

    /// Textual state, redundant with `is_active`
    pub status: AccountStatus,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Who created this account ("system" or an admin user id)
    pub added_by: Option<String>,

    /// Restriction audit metadata
    pub restricted_at: Option<DateTime<Utc>>,
    pub restricted_by: Option<Uuid>,
    pub restrict_reason: Option<String>,

    /// Reactivation audit metadata
    pub activated_at: Option<DateTime<Utc>>,
    pub activated_by: Option<Uuid>,
}

impl User {
    /// Creates a new active, verified user
    ///
    /// Accounts created through signup are active and verified immediately;
    /// the verification flow exists for accounts that lose that state.
    pub fn new(
        email: String,
        name: String,
        password_hash: String,
        role: UserRole,
        designation: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            role,
            designation,
            is_verified: true,
            is_active: true,
            status: AccountStatus::Active,
            created_at: Utc::now(),
            added_by: None,
            restricted_at: None,
            restricted_by: None,
            restrict_reason: None,
            activated_at: None,
            activated_by: None,
        }
    }

    /// Marks the account's email as verified and re-activates it
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.status = AccountStatus::Active;
    }

    /// Restricts the account so it can no longer log in
    pub fn restrict(&mut self, actor: Uuid, reason: Option<String>) {
        self.is_active = false;
        self.status = AccountStatus::Restricted;
        self.restricted_at = Some(Utc::now());
        self.restricted_by = Some(actor);
        self.restrict_reason =
            Some(reason.unwrap_or_else(|| String::from("No reason provided")));
    }

    /// Lifts a restriction and re-activates the account
    pub fn activate(&mut self, actor: Uuid) {
        self.is_active = true;
        self.status = AccountStatus::Active;
        self.activated_at = Some(Utc::now());
        self.activated_by = Some(actor);
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }

    /// Login username derived from the display name
    pub fn username(&self) -> String {
        username_from_name(&self.name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Client-safe projection of this user, without the password hash
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            designation: self.designation.clone(),
            is_verified: self.is_verified,
            is_active: self.is_active,
            status: self.status,
            created_at: self.created_at,
            added_by: self.added_by.clone(),
            restricted_at: self.restricted_at,
            restrict_reason: self.restrict_reason.clone(),
            activated_at: self.activated_at,
        }
    }
}

/// User projection safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<DateTime<Utc>>,
}
