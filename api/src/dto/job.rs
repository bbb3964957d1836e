//! Job endpoint request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use jp_core::domain::entities::job::{Job, JobStatus};

/// Requirements arrive either as a list or as one comma-separated string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requirements {
    List(Vec<String>),
    Text(String),
}

impl Requirements {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Requirements::List(list) => list,
            Requirements::Text(text) => text
                .split(',')
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub requirements: Option<Requirements>,
    #[validate(length(min = 1))]
    pub location: String,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    #[validate(length(min = 1))]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Requirements>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub status: Option<JobStatus>,
}

/// Query parameters accepted by the job listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Response body carrying a job and a confirmation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub message: String,
    pub job: Job,
}
