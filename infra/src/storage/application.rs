//! In-memory implementation of the application repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use jp_core::domain::entities::application::Application;
use jp_core::errors::DomainError;
use jp_core::repositories::ApplicationRepository;

/// Process-local application store
#[derive(Clone, Default)]
pub struct InMemoryApplicationRepository {
    applications: Arc<RwLock<HashMap<Uuid, Application>>>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications.get(&id).cloned())
    }

    async fn find_by_job_and_employee(
        &self,
        job_id: Uuid,
        employee_id: Uuid,
    ) -> Result<Option<Application>, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications
            .values()
            .find(|a| a.job_id == job_id && a.employee_id == employee_id)
            .cloned())
    }

    async fn create(&self, application: Application) -> Result<Application, DomainError> {
        let mut applications = self.applications.write().await;
        applications.insert(application.id, application.clone());
        Ok(application)
    }

    async fn update(&self, application: Application) -> Result<Application, DomainError> {
        let mut applications = self.applications.write().await;

        if !applications.contains_key(&application.id) {
            return Err(DomainError::not_found("Application"));
        }

        applications.insert(application.id, application.clone());
        Ok(application)
    }

    async fn list_by_employee(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<Application>, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications
            .values()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Application>, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_application(job_id: Uuid, employee_id: Uuid) -> Application {
        Application::new(
            job_id,
            employee_id,
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
        )
    }

    #[tokio::test]
    async fn test_find_by_job_and_employee() {
        let repo = InMemoryApplicationRepository::new();
        let job_id = Uuid::new_v4();
        let employee_id = Uuid::new_v4();

        repo.create(sample_application(job_id, employee_id))
            .await
            .unwrap();

        assert!(repo
            .find_by_job_and_employee(job_id, employee_id)
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_job_and_employee(job_id, Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_by_employee() {
        let repo = InMemoryApplicationRepository::new();
        let employee_id = Uuid::new_v4();

        repo.create(sample_application(Uuid::new_v4(), employee_id))
            .await
            .unwrap();
        repo.create(sample_application(Uuid::new_v4(), employee_id))
            .await
            .unwrap();
        repo.create(sample_application(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(repo.list_by_employee(employee_id).await.unwrap().len(), 2);
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }
}
