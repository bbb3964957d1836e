//! Request handling support shared by the route modules.

pub mod error;
