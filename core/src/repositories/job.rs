//! Job repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::job::Job;
use crate::errors::DomainError;

/// Repository contract for [`Job`] postings
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Find a job by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError>;

    /// Persist a new job posting
    async fn create(&self, job: Job) -> Result<Job, DomainError>;

    /// Replace an existing job posting
    async fn update(&self, job: Job) -> Result<Job, DomainError>;

    /// Delete a job; returns `false` when no such job existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List every job posting
    async fn list(&self) -> Result<Vec<Job>, DomainError>;
}
