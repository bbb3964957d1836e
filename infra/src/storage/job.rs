//! In-memory implementation of the job repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use jp_core::domain::entities::job::Job;
use jp_core::errors::DomainError;
use jp_core::repositories::JobRepository;

/// Process-local job store
#[derive(Clone, Default)]
pub struct InMemoryJobRepository {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        let mut jobs = self.jobs.write().await;
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn update(&self, job: Job) -> Result<Job, DomainError> {
        let mut jobs = self.jobs.write().await;

        if !jobs.contains_key(&job.id) {
            return Err(DomainError::not_found("Job"));
        }

        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.values().cloned().collect())
    }
}
