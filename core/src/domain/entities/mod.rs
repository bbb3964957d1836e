//! Domain entities owned by the Job Portal core.

pub mod application;
pub mod job;
pub mod one_time_token;
pub mod token;
pub mod user;

pub use application::{Application, ApplicationStatus};
pub use job::{Job, JobStatus};
pub use one_time_token::{OneTimeToken, TokenKind};
pub use token::Claims;
pub use user::{AccountStatus, PublicUser, User, UserRole};
