//! Integration tests for the job and application workflows against the
//! in-memory infrastructure.

use std::sync::Arc;

use jp_core::domain::entities::application::ApplicationStatus;
use jp_core::domain::entities::user::{User, UserRole};
use jp_core::errors::{AuthError, DomainError};
use jp_core::repositories::UserRepository;
use jp_core::services::application::{ApplicationChanges, ApplicationService};
use jp_core::services::job::{JobChanges, JobFilter, JobService, NewJob};
use jp_infra::email::ConsoleEmailService;
use jp_infra::storage::{
    InMemoryApplicationRepository, InMemoryJobRepository, InMemoryUserRepository,
};
use uuid::Uuid;

struct TestStack {
    job_service:
        JobService<InMemoryJobRepository, InMemoryUserRepository, ConsoleEmailService>,
    application_service: ApplicationService<
        InMemoryApplicationRepository,
        InMemoryJobRepository,
        InMemoryUserRepository,
        ConsoleEmailService,
    >,
    user_repository: Arc<InMemoryUserRepository>,
    email_service: Arc<ConsoleEmailService>,
}

fn stack() -> TestStack {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let job_repository = Arc::new(InMemoryJobRepository::new());
    let application_repository = Arc::new(InMemoryApplicationRepository::new());
    let email_service = Arc::new(ConsoleEmailService::new());

    TestStack {
        job_service: JobService::new(
            job_repository.clone(),
            user_repository.clone(),
            email_service.clone(),
        ),
        application_service: ApplicationService::new(
            application_repository,
            job_repository,
            user_repository.clone(),
            email_service.clone(),
        ),
        user_repository,
        email_service,
    }
}

async fn create_user(stack: &TestStack, email: &str, name: &str, role: UserRole) -> Uuid {
    let user = User::new(
        email.to_string(),
        name.to_string(),
        "$2b$12$fakehash".to_string(),
        role,
        None,
    );
    stack.user_repository.create(user).await.unwrap().id
}

fn new_job(title: &str, category: &str) -> NewJob {
    NewJob {
        title: title.to_string(),
        description: format!("{} role", title),
        requirements: vec!["Rust".to_string()],
        location: "Karachi".to_string(),
        salary: None,
        job_type: None,
        category: category.to_string(),
    }
}

#[actix_rt::test]
async fn test_only_employers_post_jobs() {
    let stack = stack();
    let employee = create_user(&stack, "jane@x.com", "Jane Doe", UserRole::Employee).await;

    let err = stack
        .job_service
        .post_job(employee, UserRole::Employee, new_job("Backend Engineer", "IT"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Forbidden { .. })));
}

#[actix_rt::test]
async fn test_job_posting_denormalizes_employer_and_notifies() {
    let stack = stack();
    let employer = create_user(&stack, "hr@acme.com", "Acme HR", UserRole::Employer).await;

    let job = stack
        .job_service
        .post_job(employer, UserRole::Employer, new_job("Backend Engineer", "IT"))
        .await
        .unwrap();

    assert_eq!(job.employer_name, "Acme HR");
    assert_eq!(job.employer_email, "hr@acme.com");
    assert_eq!(stack.email_service.sent_count(), 1);
}

#[actix_rt::test]
async fn test_job_listing_filters_and_ordering() {
    let stack = stack();
    let employer = create_user(&stack, "hr@acme.com", "Acme HR", UserRole::Employer).await;

    let first = stack
        .job_service
        .post_job(employer, UserRole::Employer, new_job("Backend Engineer", "IT"))
        .await
        .unwrap();
    let second = stack
        .job_service
        .post_job(employer, UserRole::Employer, new_job("Sales Lead", "Sales"))
        .await
        .unwrap();

    // Close the first posting
    stack
        .job_service
        .update_job(
            employer,
            first.id,
            JobChanges {
                status: Some(jp_core::domain::entities::job::JobStatus::Closed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let active = stack
        .job_service
        .list_jobs(JobFilter {
            active_only: true,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second.id);

    let it_jobs = stack
        .job_service
        .list_jobs(JobFilter {
            category: Some("IT".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(it_jobs.len(), 1);
    assert_eq!(it_jobs[0].id, first.id);

    let searched = stack
        .job_service
        .list_jobs(JobFilter {
            search: Some("backend".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(searched.len(), 1);

    // Newest first
    let all = stack.job_service.list_jobs(JobFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].created_at >= all[1].created_at);
}

#[actix_rt::test]
async fn test_only_owner_updates_or_deletes_job() {
    let stack = stack();
    let owner = create_user(&stack, "hr@acme.com", "Acme HR", UserRole::Employer).await;
    let other = create_user(&stack, "hr@other.com", "Other HR", UserRole::Employer).await;

    let job = stack
        .job_service
        .post_job(owner, UserRole::Employer, new_job("Backend Engineer", "IT"))
        .await
        .unwrap();

    let err = stack
        .job_service
        .update_job(
            other,
            job.id,
            JobChanges {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Forbidden { .. })));

    let err = stack.job_service.delete_job(other, job.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Forbidden { .. })));

    stack.job_service.delete_job(owner, job.id).await.unwrap();
    let err = stack.job_service.get_job(job.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[actix_rt::test]
async fn test_apply_rules() {
    let stack = stack();
    let employer = create_user(&stack, "hr@acme.com", "Acme HR", UserRole::Employer).await;
    let employee = create_user(&stack, "jane@x.com", "Jane Doe", UserRole::Employee).await;

    let job = stack
        .job_service
        .post_job(employer, UserRole::Employer, new_job("Backend Engineer", "IT"))
        .await
        .unwrap();

    // Employers cannot apply
    let err = stack
        .application_service
        .apply(employer, UserRole::Employer, job.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Forbidden { .. })));

    // Unknown job
    let err = stack
        .application_service
        .apply(employee, UserRole::Employee, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let application = stack
        .application_service
        .apply(employee, UserRole::Employee, job.id)
        .await
        .unwrap();
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.employee_email, "jane@x.com");

    // One application per job per employee
    let err = stack
        .application_service
        .apply(employee, UserRole::Employee, job.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::BusinessRule { .. }));
}

#[actix_rt::test]
async fn test_application_listing_by_role() {
    let stack = stack();
    let employer = create_user(&stack, "hr@acme.com", "Acme HR", UserRole::Employer).await;
    let rival = create_user(&stack, "hr@other.com", "Other HR", UserRole::Employer).await;
    let employee = create_user(&stack, "jane@x.com", "Jane Doe", UserRole::Employee).await;
    let manager = create_user(&stack, "boss@x.com", "The Boss", UserRole::Management).await;

    let job = stack
        .job_service
        .post_job(employer, UserRole::Employer, new_job("Backend Engineer", "IT"))
        .await
        .unwrap();
    stack
        .application_service
        .apply(employee, UserRole::Employee, job.id)
        .await
        .unwrap();

    let own = stack
        .application_service
        .list_for(employee, UserRole::Employee)
        .await
        .unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].job.as_ref().unwrap().id, job.id);

    let incoming = stack
        .application_service
        .list_for(employer, UserRole::Employer)
        .await
        .unwrap();
    assert_eq!(incoming.len(), 1);

    let rival_view = stack
        .application_service
        .list_for(rival, UserRole::Employer)
        .await
        .unwrap();
    assert!(rival_view.is_empty());

    let err = stack
        .application_service
        .list_for(manager, UserRole::Management)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Forbidden { .. })));
}

#[actix_rt::test]
async fn test_status_update_notifies_candidate() {
    let stack = stack();
    let employer = create_user(&stack, "hr@acme.com", "Acme HR", UserRole::Employer).await;
    let employee = create_user(&stack, "jane@x.com", "Jane Doe", UserRole::Employee).await;

    let job = stack
        .job_service
        .post_job(employer, UserRole::Employer, new_job("Backend Engineer", "IT"))
        .await
        .unwrap();
    let application = stack
        .application_service
        .apply(employee, UserRole::Employee, job.id)
        .await
        .unwrap();

    // job-posted + application-received + new-application
    let sent_before = stack.email_service.sent_count();

    let updated = stack
        .application_service
        .update_application(
            employer,
            application.id,
            ApplicationChanges {
                status: Some(ApplicationStatus::Interview),
                progress: Some(50),
                notes: Some("Strong CV".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Interview);
    assert_eq!(updated.progress, 50);
    assert_eq!(stack.email_service.sent_count(), sent_before + 1);

    // Re-applying the same status sends nothing new
    stack
        .application_service
        .update_application(
            employer,
            application.id,
            ApplicationChanges {
                status: Some(ApplicationStatus::Interview),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(stack.email_service.sent_count(), sent_before + 1);

    // A stranger cannot update it
    let stranger = create_user(&stack, "hr@other.com", "Other HR", UserRole::Employer).await;
    let err = stack
        .application_service
        .update_application(
            stranger,
            application.id,
            ApplicationChanges {
                progress: Some(10),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Forbidden { .. })));
}

#[actix_rt::test]
async fn test_progress_summary() {
    let stack = stack();
    let employer = create_user(&stack, "hr@acme.com", "Acme HR", UserRole::Employer).await;
    let employee = create_user(&stack, "jane@x.com", "Jane Doe", UserRole::Employee).await;

    let first = stack
        .job_service
        .post_job(employer, UserRole::Employer, new_job("Backend Engineer", "IT"))
        .await
        .unwrap();
    let second = stack
        .job_service
        .post_job(employer, UserRole::Employer, new_job("Sales Lead", "Sales"))
        .await
        .unwrap();

    let a = stack
        .application_service
        .apply(employee, UserRole::Employee, first.id)
        .await
        .unwrap();
    stack
        .application_service
        .apply(employee, UserRole::Employee, second.id)
        .await
        .unwrap();

    stack
        .application_service
        .update_application(
            employer,
            a.id,
            ApplicationChanges {
                status: Some(ApplicationStatus::Interview),
                progress: Some(60),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let summary = stack
        .application_service
        .progress_summary(employee, UserRole::Employee)
        .await
        .unwrap();
    assert_eq!(summary.total_applications, 2);
    assert_eq!(summary.pending_applications, 1);
    assert_eq!(summary.in_progress_applications, 1);
    assert_eq!(summary.accepted_applications, 0);
    assert_eq!(summary.average_progress, 30);
    assert_eq!(summary.applications.len(), 2);

    // Employers have no progress view
    let err = stack
        .application_service
        .progress_summary(employer, UserRole::Employer)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Forbidden { .. })));
}
