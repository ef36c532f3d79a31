//! Authentication value objects returned by the session orchestrator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Authentication response containing the token pair and the user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new pairs
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// The authenticated user's profile (password hash stripped)
    pub user: User,
}

impl AuthResponse {
    /// Builds a response from a user and an issued token pair
    pub fn new(user: User, pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
            user: user.without_password(),
        }
    }
}

/// Identity resolved by a guard, attached to the request context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The resolved user id
    pub user_id: Uuid,

    /// The device this credential was scoped to
    pub device_id: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: Uuid, device_id: impl Into<String>) -> Self {
        Self {
            user_id,
            device_id: device_id.into(),
        }
    }
}
