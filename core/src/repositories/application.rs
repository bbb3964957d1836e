//! Application repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::application::Application;
use crate::errors::DomainError;

/// Repository contract for [`Application`] records
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Find an application by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>, DomainError>;

    /// Find the application a given employee made to a given job, if any
    async fn find_by_job_and_employee(
        &self,
        job_id: Uuid,
        employee_id: Uuid,
    ) -> Result<Option<Application>, DomainError>;

    /// Persist a new application
    async fn create(&self, application: Application) -> Result<Application, DomainError>;

    /// Replace an existing application
    async fn update(&self, application: Application) -> Result<Application, DomainError>;

    /// List every application made by the given employee
    async fn list_by_employee(&self, employee_id: Uuid) -> Result<Vec<Application>, DomainError>;

    /// List every application
    async fn list(&self) -> Result<Vec<Application>, DomainError>;
}
