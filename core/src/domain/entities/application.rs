//! Job application entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Screening,
    Interview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Screening => "screening",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Whether this status counts as "in progress" for the progress summary
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Screening | ApplicationStatus::Interview
        )
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An employee's application to a job posting
///
/// Applicant name and email are snapshotted at apply time so the record stays
/// meaningful even if the account changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub employee_email: String,
    pub status: ApplicationStatus,
    /// Review progress, 0-100
    pub progress: u8,
    pub notes: String,
    pub applied_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Application {
    pub fn new(
        job_id: Uuid,
        employee_id: Uuid,
        employee_name: String,
        employee_email: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            employee_id,
            employee_name,
            employee_email,
            status: ApplicationStatus::Pending,
            progress: 0,
            notes: String::new(),
            applied_at: Utc::now(),
            updated_at: None,
        }
    }
}
