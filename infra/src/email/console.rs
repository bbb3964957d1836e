//! Console-backed email service.
//!
//! Real delivery is out of scope for this deployment; the service renders
//! every message and writes it to the log, and keeps a counter so tests can
//! observe delivery.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use jp_core::domain::entities::application::{Application, ApplicationStatus};
use jp_core::domain::entities::job::Job;
use jp_core::services::email::EmailServiceTrait;

use super::templates::{self, Email};

/// Email service that logs messages instead of sending them
#[derive(Clone, Default)]
pub struct ConsoleEmailService {
    /// Counter of messages "sent", for tests
    sent_count: Arc<AtomicU64>,
}

impl ConsoleEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages delivered so far
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::SeqCst)
    }

    fn deliver(&self, to: &str, email: Email) -> Result<(), String> {
        self.sent_count.fetch_add(1, Ordering::SeqCst);
        info!(
            to = %to,
            subject = %email.subject,
            "email sent\n========== EMAIL SENT ==========\nTo: {}\nSubject: {}\nBody: {}\n===============================",
            to,
            email.subject,
            email.body,
        );
        Ok(())
    }
}

#[async_trait]
impl EmailServiceTrait for ConsoleEmailService {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), String> {
        self.deliver(to, templates::email_verification(code))
    }

    async fn send_password_reset(
        &self,
        to: &str,
        name: &str,
        reset_link: &str,
    ) -> Result<(), String> {
        self.deliver(to, templates::password_reset(name, reset_link))
    }

    async fn send_job_posted(&self, to: &str, job: &Job) -> Result<(), String> {
        self.deliver(to, templates::job_posted(job))
    }

    async fn send_application_received(
        &self,
        to: &str,
        candidate_name: &str,
        job: &Job,
    ) -> Result<(), String> {
        self.deliver(to, templates::application_received(candidate_name, job))
    }

    async fn send_new_application(
        &self,
        to: &str,
        job: &Job,
        application: &Application,
    ) -> Result<(), String> {
        self.deliver(to, templates::new_application(job, application))
    }

    async fn send_application_update(
        &self,
        to: &str,
        job: &Job,
        application: &Application,
        status: ApplicationStatus,
    ) -> Result<(), String> {
        self.deliver(to, templates::application_update(job, application, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivery_increments_counter() {
        let service = ConsoleEmailService::new();
        assert_eq!(service.sent_count(), 0);

        service
            .send_verification_code("a@x.com", "1234")
            .await
            .unwrap();
        service
            .send_password_reset("a@x.com", "Alice", "https://portal/reset")
            .await
            .unwrap();

        assert_eq!(service.sent_count(), 2);
    }
}
