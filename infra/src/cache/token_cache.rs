//! Redis-backed access-token cache.
//!
//! One set per (user, device) pair under `{prefix}:{user_id}:{device_id}`.
//! Issuing a pair replaces the set wholesale, so at most one access token
//! is live per pair and the access guard's membership check doubles as a
//! revocation check. The TTL tracks the access-token lifetime; entries for
//! expired tokens fall out on their own.

use async_trait::async_trait;
use uuid::Uuid;

use pl_core::errors::DomainError;
use pl_core::repositories::TokenCache;

use super::RedisClient;

/// Redis implementation of the access-token cache
pub struct RedisTokenCache {
    client: RedisClient,
    key_prefix: String,
    ttl_secs: usize,
}

impl RedisTokenCache {
    /// Create a new token cache
    ///
    /// `ttl_secs` should match the access-token lifetime.
    pub fn new(client: RedisClient, key_prefix: impl Into<String>, ttl_secs: usize) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
            ttl_secs,
        }
    }

    fn key(&self, user_id: Uuid, device_id: &str) -> String {
        cache_key(&self.key_prefix, user_id, device_id)
    }
}

fn cache_key(prefix: &str, user_id: Uuid, device_id: &str) -> String {
    format!("{}:{}:{}", prefix, user_id, device_id)
}

#[async_trait]
impl TokenCache for RedisTokenCache {
    async fn save_token(&self, user_id: Uuid, device_id: &str, token: &str) -> Result<(), DomainError> {
        self.client
            .replace_set(&self.key(user_id, device_id), token, self.ttl_secs)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to cache access token: {}", e)))
    }

    async fn token_exists(&self, user_id: Uuid, device_id: &str, token: &str) -> Result<bool, DomainError> {
        self.client
            .set_contains(&self.key(user_id, device_id), token)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to check access token: {}", e)))
    }

    async fn delete_tokens(&self, user_id: Uuid, device_id: &str) -> Result<(), DomainError> {
        self.client
            .delete(&self.key(user_id, device_id))
            .await
            .map_err(|e| DomainError::internal(format!("Failed to drop access tokens: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        assert_eq!(
            cache_key("access_token", Uuid::nil(), "device-1"),
            "access_token:00000000-0000-0000-0000-000000000000:device-1"
        );
    }
}
