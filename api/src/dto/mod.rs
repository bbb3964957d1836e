//! Request and response data structures for the HTTP API.
//!
//! Every request body is an explicit struct validated at the boundary before
//! it reaches the core.

pub mod admin;
pub mod application;
pub mod auth;
pub mod job;
