//! One-time token ledger: time-boxed, single-use secrets keyed by email.

pub mod service;
pub mod store;

pub use service::OneTimeTokenLedger;
pub use store::TokenStoreTrait;
