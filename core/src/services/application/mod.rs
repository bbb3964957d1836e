//! Job application workflows.

pub mod service;

pub use service::{
    ApplicationChanges, ApplicationService, ApplicationWithJob, ProgressSummary,
};
