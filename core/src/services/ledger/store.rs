//! Storage trait backing the one-time token ledger.

use async_trait::async_trait;

use crate::domain::entities::one_time_token::OneTimeToken;

/// Trait for one-time token storage
///
/// A store holds at most one live token per email; `put` overwrites any
/// existing entry. Each ledger instance owns an independent store, so
/// verification codes and reset tokens never collide.
#[async_trait]
pub trait TokenStoreTrait: Send + Sync {
    /// Store a token for an email, replacing any previous entry
    async fn put(&self, email: &str, token: OneTimeToken) -> Result<(), String>;

    /// Fetch the live token for an email, if any
    async fn get(&self, email: &str) -> Result<Option<OneTimeToken>, String>;

    /// Remove the token for an email
    async fn remove(&self, email: &str) -> Result<(), String>;
}
