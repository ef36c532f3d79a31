//! # Postline Infrastructure
//!
//! Concrete implementations of the core repository ports:
//! MySQL persistence for users, sessions and posts via SQLx, and the
//! Redis access-token cache used for early revocation.

pub mod cache;
pub mod database;

/// Infrastructure bootstrap errors
///
/// Repository methods speak `DomainError`; this type covers the startup
/// path only (pool creation, client connection, bad configuration).
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
