//! Job posting workflows.

pub mod service;

pub use service::{JobChanges, JobFilter, JobService, NewJob};
