//! Job posting service implementation.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobStatus};
use crate::domain::entities::user::UserRole;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{JobRepository, UserRepository};
use crate::services::email::EmailServiceTrait;

/// Request to create a job posting
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub category: String,
}

/// Partial update to a job posting; unset fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct JobChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub status: Option<JobStatus>,
}

/// Listing filters
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Only return active postings
    pub active_only: bool,
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive search over title and description
    pub search: Option<String>,
}

/// Service for job posting workflows
pub struct JobService<J, U, E>
where
    J: JobRepository,
    U: UserRepository,
    E: EmailServiceTrait,
{
    job_repository: Arc<J>,
    user_repository: Arc<U>,
    email_service: Arc<E>,
}

impl<J, U, E> JobService<J, U, E>
where
    J: JobRepository,
    U: UserRepository,
    E: EmailServiceTrait,
{
    pub fn new(job_repository: Arc<J>, user_repository: Arc<U>, email_service: Arc<E>) -> Self {
        Self {
            job_repository,
            user_repository,
            email_service,
        }
    }

    /// Create a job posting on behalf of an employer
    ///
    /// The employer's name and email are denormalized onto the posting, and
    /// a confirmation email is dispatched.
    pub async fn post_job(
        &self,
        actor: Uuid,
        actor_role: UserRole,
        new_job: NewJob,
    ) -> DomainResult<Job> {
        if actor_role != UserRole::Employer {
            return Err(AuthError::forbidden("Only employers can post jobs").into());
        }

        let employer = self.user_repository.find_by_id(actor).await?;
        let (employer_name, employer_email) = match &employer {
            Some(user) => (user.name.clone(), user.email.clone()),
            None => (String::from("Unknown"), String::new()),
        };

        let job = Job::new(
            actor,
            employer_name,
            employer_email.clone(),
            new_job.title,
            new_job.description,
            new_job.requirements,
            new_job.location,
            new_job.salary,
            new_job.job_type,
            new_job.category,
        );

        let job = self.job_repository.create(job).await?;
        info!(job_id = %job.id, employer_id = %actor, "job posted");

        if !employer_email.is_empty() {
            if let Err(e) = self.email_service.send_job_posted(&employer_email, &job).await {
                warn!(error = %e, "failed to deliver job-posted email");
            }
        }

        Ok(job)
    }

    /// List job postings, newest first
    pub async fn list_jobs(&self, filter: JobFilter) -> DomainResult<Vec<Job>> {
        let mut jobs = self.job_repository.list().await?;

        if filter.active_only {
            jobs.retain(|j| j.is_active());
        }
        if let Some(category) = &filter.category {
            jobs.retain(|j| &j.category == category);
        }
        if let Some(search) = &filter.search {
            jobs.retain(|j| j.matches_search(search));
        }

        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    /// Fetch a single job posting
    pub async fn get_job(&self, id: Uuid) -> DomainResult<Job> {
        self.job_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))
    }

    /// Update a job posting; only the owning employer may do this
    pub async fn update_job(
        &self,
        actor: Uuid,
        id: Uuid,
        changes: JobChanges,
    ) -> DomainResult<Job> {
        let mut job = self.get_job(id).await?;

        if job.employer_id != actor {
            return Err(AuthError::forbidden("Not authorized to update this job").into());
        }

        if let Some(title) = changes.title {
            job.title = title;
        }
        if let Some(description) = changes.description {
            job.description = description;
        }
        if let Some(requirements) = changes.requirements {
            job.requirements = requirements;
        }
        if let Some(location) = changes.location {
            job.location = location;
        }
        if let Some(salary) = changes.salary {
            job.salary = Some(salary);
        }
        if let Some(job_type) = changes.job_type {
            job.job_type = job_type;
        }
        if let Some(category) = changes.category {
            job.category = category;
        }
        if let Some(status) = changes.status {
            job.status = status;
        }
        job.updated_at = Some(chrono::Utc::now());

        self.job_repository.update(job).await
    }

    /// Delete a job posting; only the owning employer may do this
    pub async fn delete_job(&self, actor: Uuid, id: Uuid) -> DomainResult<()> {
        let job = self.get_job(id).await?;

        if job.employer_id != actor {
            return Err(AuthError::forbidden("Not authorized to delete this job").into());
        }

        self.job_repository.delete(id).await?;
        info!(job_id = %id, employer_id = %actor, "job deleted");
        Ok(())
    }
}
