//! JWT issuing and verification.
//!
//! The service is pure: signing and verifying are CPU-bound and have no
//! store side effects. Session bookkeeping lives in the auth service.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair, TokenType};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and verifying access/refresh token pairs
pub struct TokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_expiry: i64,
    refresh_expiry: i64,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from signing configuration
    ///
    /// Missing or empty secrets are a startup error, never a per-request one.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.access_secret.is_empty() || config.refresh_secret.is_empty() {
            return Err(DomainError::internal("JWT secrets are not configured"));
        }

        let mut validation = Validation::default();
        validation.validate_exp = true;

        Ok(Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_expiry: config.access_expiry,
            refresh_expiry: config.refresh_expiry,
            validation,
        })
    }

    /// Access token lifetime in seconds
    pub fn access_expiry(&self) -> i64 {
        self.access_expiry
    }

    /// Issues an access/refresh pair for a (user, device) payload
    pub fn issue_pair(&self, user_id: Uuid, device_id: &str) -> Result<TokenPair, DomainError> {
        let access_claims = Claims::new(user_id, device_id, self.access_expiry);
        let refresh_claims = Claims::new(user_id, device_id, self.refresh_expiry);

        let access_token = encode(&Header::default(), &access_claims, &self.access_encoding)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;
        let refresh_token = encode(&Header::default(), &refresh_claims, &self.refresh_encoding)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(TokenPair::new(access_token, refresh_token, self.access_expiry))
    }

    /// Verifies a token against the secret matching its declared type
    ///
    /// Expired, tampered and malformed tokens all fail as `InvalidToken`;
    /// the caller gets no distinction between the failure modes.
    pub fn verify(&self, token: &str, token_type: TokenType) -> Result<Claims, DomainError> {
        let decoding = match token_type {
            TokenType::Access => &self.access_decoding,
            TokenType::Refresh => &self.refresh_decoding,
        };

        decode::<Claims>(token, decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))
    }
}
