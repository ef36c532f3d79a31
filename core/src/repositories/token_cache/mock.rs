//! Mock implementation of TokenCache for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::DomainError;

use super::r#trait::TokenCache;

/// In-memory token cache; TTL behavior is not simulated
#[derive(Default)]
pub struct MockTokenCache {
    entries: Arc<RwLock<HashMap<(Uuid, String), HashSet<String>>>>,
}

impl MockTokenCache {
    /// Create a new mock cache
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenCache for MockTokenCache {
    async fn save_token(&self, user_id: Uuid, device_id: &str, token: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        let set = entries
            .entry((user_id, device_id.to_string()))
            .or_default();
        set.clear();
        set.insert(token.to_string());
        Ok(())
    }

    async fn token_exists(&self, user_id: Uuid, device_id: &str, token: &str) -> Result<bool, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&(user_id, device_id.to_string()))
            .map(|set| set.contains(token))
            .unwrap_or(false))
    }

    async fn delete_tokens(&self, user_id: Uuid, device_id: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.remove(&(user_id, device_id.to_string()));
        Ok(())
    }
}
