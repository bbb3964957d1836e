//! Core business logic and domain layer for the Job Portal backend.
//!
//! This crate is framework-agnostic: it defines the domain entities, the
//! error taxonomy, repository traits for data access, and the services that
//! implement account lifecycle, session issuance, one-time token handling,
//! and the job/application workflows. Concrete storage and delivery
//! implementations live in the `jp_infra` crate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
