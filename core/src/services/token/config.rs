//! Token service configuration

use pl_shared::config::JwtConfig;

/// Configuration for the token service: two independent (secret, expiry)
/// pairs, one per token type.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing and verifying access tokens
    pub access_secret: String,

    /// Access token lifetime in seconds
    pub access_expiry: i64,

    /// Secret for signing and verifying refresh tokens
    pub refresh_secret: String,

    /// Refresh token lifetime in seconds
    pub refresh_expiry: i64,
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(cfg: JwtConfig) -> Self {
        Self {
            access_secret: cfg.access_secret,
            access_expiry: cfg.access_expiry,
            refresh_secret: cfg.refresh_secret,
            refresh_expiry: cfg.refresh_expiry,
        }
    }
}

#[cfg(test)]
impl TokenServiceConfig {
    /// Short-lived test configuration with distinct secrets
    pub fn for_tests() -> Self {
        Self {
            access_secret: "test-access-secret".to_string(),
            access_expiry: 900,
            refresh_secret: "test-refresh-secret".to_string(),
            refresh_expiry: 86_400,
        }
    }
}
