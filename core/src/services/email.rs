//! Outbound email notification trait.
//!
//! The core only needs the ability to notify a recipient; rendering and
//! delivery are infrastructure concerns. Notification failures are reported
//! to callers as plain strings so services can log and move on: a failed
//! email must never fail the request that triggered it.

use async_trait::async_trait;

use crate::domain::entities::application::{Application, ApplicationStatus};
use crate::domain::entities::job::Job;

/// Trait for outbound email delivery
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send an email verification code
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), String>;

    /// Send a password reset link
    async fn send_password_reset(
        &self,
        to: &str,
        name: &str,
        reset_link: &str,
    ) -> Result<(), String>;

    /// Confirm to an employer that their job posting is live
    async fn send_job_posted(&self, to: &str, job: &Job) -> Result<(), String>;

    /// Confirm to a candidate that their application was received
    async fn send_application_received(
        &self,
        to: &str,
        candidate_name: &str,
        job: &Job,
    ) -> Result<(), String>;

    /// Tell an employer about a new application to one of their jobs
    async fn send_new_application(
        &self,
        to: &str,
        job: &Job,
        application: &Application,
    ) -> Result<(), String>;

    /// Tell a candidate that their application status changed
    async fn send_application_update(
        &self,
        to: &str,
        job: &Job,
        application: &Application,
        status: ApplicationStatus,
    ) -> Result<(), String>;
}
