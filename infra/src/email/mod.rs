//! Outbound email delivery.

pub mod console;
pub mod templates;

pub use console::ConsoleEmailService;
