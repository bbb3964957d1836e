//! Administrator endpoint request and response bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use jp_core::domain::entities::application::Application;
use jp_core::domain::entities::user::{AccountStatus, PublicUser, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddMemberRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Option<UserRole>,
    pub designation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestrictMemberRequest {
    pub restrict_reason: Option<String>,
}

/// A member with their applications attached (admin detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetailResponse {
    #[serde(flatten)]
    pub user: PublicUser,
    pub applications: Vec<Application>,
}

/// Response body after adding a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreatedResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Compact member summary returned by restrict/activate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStatusSummary {
    pub id: Uuid,
    pub name: String,
    pub status: AccountStatus,
}

/// Response body after a restrict/activate transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStatusResponse {
    pub message: String,
    pub user: MemberStatusSummary,
}
