//! Domain-specific error types and error handling.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong credentials, missing or revoked token, unknown session.
    /// Deliberately undifferentiated towards callers so that neither
    /// credential existence nor token state can be probed.
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Email already registered")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Expired, malformed or tampered token. Collapsed into a single
    /// variant so callers cannot distinguish the failure mode.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a `NotFound` error over a named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound { resource: resource.into() }
    }

    /// Shorthand for an `Internal` error with a message
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal { message: message.into() }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_bridges_into_domain_error() {
        let err: DomainError = AuthError::EmailTaken.into();
        assert!(matches!(err, DomainError::Auth(AuthError::EmailTaken)));
    }

    #[test]
    fn test_token_error_message_is_uniform() {
        assert_eq!(TokenError::InvalidToken.to_string(), "Invalid token");
    }
}
