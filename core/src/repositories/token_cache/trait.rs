//! Access-token cache trait.
//!
//! JWT access tokens are self-validating until natural expiry; this cache is
//! the only mechanism for revoking one early. Entries live under a key
//! derived from (prefix, user, device) with a TTL equal to the access-token
//! expiry, so cache-based revocation and JWT self-expiry age out together.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

/// Port for the per-(user, device) set of currently valid access tokens
#[async_trait]
pub trait TokenCache: Send + Sync {
    /// Replace the token set for a (user, device) pair with a single token
    ///
    /// Implementations delete the key, add the token, and reset the TTL;
    /// the set is replaced wholesale, never appended to.
    async fn save_token(&self, user_id: Uuid, device_id: &str, token: &str) -> Result<(), DomainError>;

    /// Whether the token is in the live set for the pair
    async fn token_exists(&self, user_id: Uuid, device_id: &str, token: &str) -> Result<bool, DomainError>;

    /// Drop the whole set for the pair; absent keys are fine
    async fn delete_tokens(&self, user_id: Uuid, device_id: &str) -> Result<(), DomainError>;
}
