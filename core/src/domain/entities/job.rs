//! Job posting entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
}

/// A job posting created by an employer
///
/// Employer name and email are denormalized onto the posting so job listings
/// and notification emails do not need a user lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub employer_name: String,
    pub employer_email: String,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub job_type: String,
    pub category: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Job {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        employer_id: Uuid,
        employer_name: String,
        employer_email: String,
        title: String,
        description: String,
        requirements: Vec<String>,
        location: String,
        salary: Option<String>,
        job_type: Option<String>,
        category: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employer_id,
            employer_name,
            employer_email,
            title,
            description,
            requirements,
            location,
            salary,
            job_type: job_type.unwrap_or_else(|| String::from("full-time")),
            category,
            status: JobStatus::Active,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }

    /// Case-insensitive match against title and description
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
