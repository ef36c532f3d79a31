//! JWT claims, token types and the issued token pair.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, TokenError};

/// Which of the two signing configurations a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims carried by both access and refresh tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id as a UUID string
    pub sub: String,

    /// Device identifier scoping the session
    pub device_id: String,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Unique token id; iat has second resolution, so without this two
    /// tokens issued back to back would be byte-identical and rotation
    /// could not tell them apart
    pub jti: String,
}

impl Claims {
    /// Creates claims for a (user, device) pair with the given lifetime
    pub fn new(user_id: Uuid, device_id: impl Into<String>, expires_in_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            device_id: device_id.into(),
            exp: (now + Duration::seconds(expires_in_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, DomainError> {
        Uuid::parse_str(&self.sub).map_err(|_| DomainError::Token(TokenError::InvalidToken))
    }
}

/// An issued access/refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,

    /// Longer-lived refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_round_trip_user_id() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "d1", 900);
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_claims_bad_subject_is_invalid_token() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            device_id: "d1".to_string(),
            exp: 0,
            iat: 0,
            jti: "t".to_string(),
        };
        assert!(matches!(
            claims.user_id(),
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }
}
