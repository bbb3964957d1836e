//! Plain-text email templates.

use chrono::Utc;

use jp_core::domain::entities::application::{Application, ApplicationStatus};
use jp_core::domain::entities::job::Job;

/// A rendered email, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub subject: String,
    pub body: String,
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn email_verification(code: &str) -> Email {
    Email {
        subject: String::from("Email Verification - Job Portal"),
        body: format!(
            "Welcome to Job Portal!\n\n\
             Your email verification code is: {code}\n\n\
             This code will expire in 5 minutes.\n\n\
             If you didn't create an account, please ignore this email.\n\n\
             Best regards,\nJob Portal Team"
        ),
    }
}

pub fn password_reset(name: &str, reset_link: &str) -> Email {
    Email {
        subject: String::from("Password Reset - Job Portal"),
        body: format!(
            "Hello {name},\n\n\
             You requested a password reset for your Job Portal account.\n\n\
             Click the link below to reset your password:\n{reset_link}\n\n\
             This link will expire in 24 hours.\n\n\
             If you didn't request this, please ignore this email.\n\n\
             Best regards,\nJob Portal Team"
        ),
    }
}

pub fn job_posted(job: &Job) -> Email {
    let salary_line = match &job.salary {
        Some(salary) => format!("\n- Salary: {salary}"),
        None => String::new(),
    };
    Email {
        subject: String::from("Job Posted Successfully - Job Portal"),
        body: format!(
            "Dear {employer},\n\n\
             Your job posting has been successfully created and is now live on Job Portal.\n\n\
             Job Details:\n\
             - Position: {title}\n\
             - Category: {category}\n\
             - Location: {location}\n\
             - Job Type: {job_type}{salary_line}\n\n\
             Candidates can now view and apply for this position.\n\n\
             Best regards,\nJob Portal Team",
            employer = job.employer_name,
            title = job.title,
            category = job.category,
            location = job.location,
            job_type = job.job_type,
        ),
    }
}

pub fn application_received(candidate_name: &str, job: &Job) -> Email {
    Email {
        subject: String::from("Application Received - Job Portal"),
        body: format!(
            "Dear {candidate_name},\n\n\
             Thank you for applying for the position of {title} at {employer}.\n\n\
             We have received your application and our team will review it shortly.\n\n\
             Job Details:\n\
             - Position: {title}\n\
             - Location: {location}\n\
             - Applied Date: {date}\n\n\
             Best regards,\nJob Portal Team",
            title = job.title,
            employer = job.employer_name,
            location = job.location,
            date = Utc::now().format("%Y-%m-%d"),
        ),
    }
}

pub fn new_application(job: &Job, application: &Application) -> Email {
    Email {
        subject: format!("New Application Received - {}", job.title),
        body: format!(
            "Dear {employer},\n\n\
             You have received a new application for the position of {title}.\n\n\
             Candidate Details:\n\
             - Name: {candidate}\n\
             - Email: {email}\n\n\
             Log in to your employer dashboard to review the application.\n\n\
             Best regards,\nJob Portal Team",
            employer = job.employer_name,
            title = job.title,
            candidate = application.employee_name,
            email = application.employee_email,
        ),
    }
}

pub fn application_update(job: &Job, application: &Application, status: ApplicationStatus) -> Email {
    let status_note = match status {
        ApplicationStatus::Interview => {
            "Congratulations! You have been selected for an interview. \
             We will contact you shortly with the details."
        }
        ApplicationStatus::Accepted => {
            "Congratulations! Your application has been accepted. \
             Our HR team will reach out to you soon."
        }
        ApplicationStatus::Rejected => {
            "Thank you for your interest. Unfortunately, we have decided to move forward \
             with other candidates. We encourage you to apply for other positions that \
             match your skills."
        }
        _ => "Your application is currently being reviewed.",
    };

    Email {
        subject: format!("Application Update: {}", capitalize(status.as_str())),
        body: format!(
            "Dear {candidate},\n\n\
             Your application for the position of {title} has been updated.\n\n\
             New Status: {status}\n\n\
             {status_note}\n\n\
             Best regards,\nJob Portal Team",
            candidate = application.employee_name,
            title = job.title,
            status = capitalize(status.as_str()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_job() -> Job {
        Job::new(
            Uuid::new_v4(),
            "Acme HR".to_string(),
            "hr@acme.com".to_string(),
            "Backend Engineer".to_string(),
            "Description".to_string(),
            vec![],
            "Lahore".to_string(),
            None,
            None,
            "IT".to_string(),
        )
    }

    fn sample_application(job: &Job) -> Application {
        Application::new(
            job.id,
            Uuid::new_v4(),
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
        )
    }

    #[test]
    fn test_verification_email_contains_code() {
        let email = email_verification("4242");
        assert!(email.body.contains("4242"));
        assert!(email.subject.contains("Email Verification"));
    }

    #[test]
    fn test_password_reset_contains_link() {
        let email = password_reset("Jane", "https://portal/reset?token=abc");
        assert!(email.body.contains("https://portal/reset?token=abc"));
        assert!(email.body.contains("Hello Jane"));
    }

    #[test]
    fn test_job_posted_omits_missing_salary() {
        let email = job_posted(&sample_job());
        assert!(!email.body.contains("Salary"));

        let mut job = sample_job();
        job.salary = Some("PKR 250k".to_string());
        assert!(job_posted(&job).body.contains("- Salary: PKR 250k"));
    }

    #[test]
    fn test_application_update_status_notes() {
        let job = sample_job();
        let application = sample_application(&job);

        let accepted = application_update(&job, &application, ApplicationStatus::Accepted);
        assert_eq!(accepted.subject, "Application Update: Accepted");
        assert!(accepted.body.contains("has been accepted"));

        let pending = application_update(&job, &application, ApplicationStatus::Pending);
        assert!(pending.body.contains("currently being reviewed"));
    }
}
