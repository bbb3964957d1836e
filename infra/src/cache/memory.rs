//! In-memory one-time token store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use jp_core::domain::entities::one_time_token::OneTimeToken;
use jp_core::services::ledger::TokenStoreTrait;

/// Process-local token store backing a one-time token ledger
///
/// One instance per ledger keeps the verification-code and reset-token
/// namespaces independent. Entries disappear on restart, which silently
/// invalidates all outstanding codes and tokens.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    entries: Arc<RwLock<HashMap<String, OneTimeToken>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStoreTrait for InMemoryTokenStore {
    async fn put(&self, email: &str, token: OneTimeToken) -> Result<(), String> {
        self.entries.write().await.insert(email.to_string(), token);
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<OneTimeToken>, String> {
        Ok(self.entries.read().await.get(email).cloned())
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        self.entries.write().await.remove(email);
        Ok(())
    }
}
