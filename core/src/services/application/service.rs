//! Application service implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::application::{Application, ApplicationStatus};
use crate::domain::entities::job::Job;
use crate::domain::entities::user::UserRole;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{ApplicationRepository, JobRepository, UserRepository};
use crate::services::email::EmailServiceTrait;

/// An application together with the job it targets
///
/// The job is optional because a posting can be deleted after applications
/// were made against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: Application,
    pub job: Option<Job>,
}

/// Partial update to an application; unset fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct ApplicationChanges {
    pub status: Option<ApplicationStatus>,
    pub progress: Option<u8>,
    pub notes: Option<String>,
}

/// Aggregate view of an employee's applications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total_applications: usize,
    pub pending_applications: usize,
    pub in_progress_applications: usize,
    pub accepted_applications: usize,
    pub rejected_applications: usize,
    pub average_progress: u32,
    pub applications: Vec<ApplicationWithJob>,
}

/// Service for application workflows
pub struct ApplicationService<A, J, U, E>
where
    A: ApplicationRepository,
    J: JobRepository,
    U: UserRepository,
    E: EmailServiceTrait,
{
    application_repository: Arc<A>,
    job_repository: Arc<J>,
    user_repository: Arc<U>,
    email_service: Arc<E>,
}

impl<A, J, U, E> ApplicationService<A, J, U, E>
where
    A: ApplicationRepository,
    J: JobRepository,
    U: UserRepository,
    E: EmailServiceTrait,
{
    pub fn new(
        application_repository: Arc<A>,
        job_repository: Arc<J>,
        user_repository: Arc<U>,
        email_service: Arc<E>,
    ) -> Self {
        Self {
            application_repository,
            job_repository,
            user_repository,
            email_service,
        }
    }

    /// Apply to a job on behalf of an employee
    ///
    /// One application per (job, employee) pair; the applicant's name and
    /// email are snapshotted onto the record. Both the candidate and the
    /// employer are notified.
    pub async fn apply(
        &self,
        actor: Uuid,
        actor_role: UserRole,
        job_id: Uuid,
    ) -> DomainResult<Application> {
        if actor_role != UserRole::Employee {
            return Err(AuthError::forbidden("Only employees can apply for jobs").into());
        }

        let job = self
            .job_repository
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))?;

        if self
            .application_repository
            .find_by_job_and_employee(job_id, actor)
            .await?
            .is_some()
        {
            return Err(DomainError::BusinessRule {
                message: String::from("You have already applied for this job"),
            });
        }

        let user = self
            .user_repository
            .find_by_id(actor)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let application =
            Application::new(job_id, actor, user.name.clone(), user.email.clone());
        let application = self.application_repository.create(application).await?;
        info!(application_id = %application.id, job_id = %job_id, "application submitted");

        if let Err(e) = self
            .email_service
            .send_application_received(&user.email, &user.name, &job)
            .await
        {
            warn!(error = %e, "failed to deliver application-received email");
        }
        if let Err(e) = self
            .email_service
            .send_new_application(&job.employer_email, &job, &application)
            .await
        {
            warn!(error = %e, "failed to deliver new-application email");
        }

        Ok(application)
    }

    /// List applications visible to the caller
    ///
    /// Employees see their own applications; employers see applications to
    /// their own postings. Every other role is refused.
    pub async fn list_for(
        &self,
        actor: Uuid,
        actor_role: UserRole,
    ) -> DomainResult<Vec<ApplicationWithJob>> {
        let applications = match actor_role {
            UserRole::Employee => self.application_repository.list_by_employee(actor).await?,
            UserRole::Employer => {
                let mut owned = Vec::new();
                for application in self.application_repository.list().await? {
                    if let Some(job) =
                        self.job_repository.find_by_id(application.job_id).await?
                    {
                        if job.employer_id == actor {
                            owned.push(application);
                        }
                    }
                }
                owned
            }
            _ => return Err(AuthError::forbidden("Access denied").into()),
        };

        self.attach_jobs(applications).await
    }

    /// List applications made by a specific employee (admin views)
    pub async fn list_by_employee(&self, employee_id: Uuid) -> DomainResult<Vec<Application>> {
        self.application_repository.list_by_employee(employee_id).await
    }

    /// Update an application's review state
    ///
    /// Only the employer owning the targeted job may update; a status change
    /// notifies the candidate.
    pub async fn update_application(
        &self,
        actor: Uuid,
        application_id: Uuid,
        changes: ApplicationChanges,
    ) -> DomainResult<Application> {
        let mut application = self
            .application_repository
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Application"))?;

        let job = self.job_repository.find_by_id(application.job_id).await?;
        let job = match job {
            Some(job) if job.employer_id == actor => job,
            _ => {
                return Err(
                    AuthError::forbidden("Not authorized to update this application").into(),
                )
            }
        };

        if let Some(status) = changes.status {
            if status != application.status {
                if let Err(e) = self
                    .email_service
                    .send_application_update(
                        &application.employee_email,
                        &job,
                        &application,
                        status,
                    )
                    .await
                {
                    warn!(error = %e, "failed to deliver application-update email");
                }
            }
            application.status = status;
        }
        if let Some(progress) = changes.progress {
            application.progress = progress.min(100);
        }
        if let Some(notes) = changes.notes {
            application.notes = notes;
        }
        application.updated_at = Some(chrono::Utc::now());

        self.application_repository.update(application).await
    }

    /// Aggregate progress view for an employee
    pub async fn progress_summary(
        &self,
        actor: Uuid,
        actor_role: UserRole,
    ) -> DomainResult<ProgressSummary> {
        if actor_role != UserRole::Employee {
            return Err(AuthError::forbidden("Only employees can view their progress").into());
        }

        let applications = self.application_repository.list_by_employee(actor).await?;

        let total = applications.len();
        let pending = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count();
        let in_progress = applications
            .iter()
            .filter(|a| a.status.is_in_progress())
            .count();
        let accepted = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Accepted)
            .count();
        let rejected = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Rejected)
            .count();
        let average_progress = if total > 0 {
            let sum: u32 = applications.iter().map(|a| a.progress as u32).sum();
            (sum as f64 / total as f64).round() as u32
        } else {
            0
        };

        Ok(ProgressSummary {
            total_applications: total,
            pending_applications: pending,
            in_progress_applications: in_progress,
            accepted_applications: accepted,
            rejected_applications: rejected,
            average_progress,
            applications: self.attach_jobs(applications).await?,
        })
    }

    async fn attach_jobs(
        &self,
        applications: Vec<Application>,
    ) -> DomainResult<Vec<ApplicationWithJob>> {
        let mut result = Vec::with_capacity(applications.len());
        for application in applications {
            let job = self.job_repository.find_by_id(application.job_id).await?;
            result.push(ApplicationWithJob { application, job });
        }
        Ok(result)
    }
}
