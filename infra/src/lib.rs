//! Infrastructure layer for the Job Portal backend.
//!
//! Provides the concrete implementations behind the core's traits: in-memory
//! repositories for users, jobs and applications, the in-memory one-time
//! token store, and a console-backed email service. Everything here lives
//! for the lifetime of the process; a restart drops all state, which is the
//! documented behavior of this deployment.

pub mod cache;
pub mod email;
pub mod storage;
