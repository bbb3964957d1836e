//! In-memory repository implementations.
//!
//! Each repository serializes access to its collection behind a
//! `tokio::sync::RwLock`, preserving the domain invariants on the
//! multi-threaded actix runtime.

pub mod application;
pub mod job;
pub mod user;

pub use application::InMemoryApplicationRepository;
pub use job::InMemoryJobRepository;
pub use user::InMemoryUserRepository;
