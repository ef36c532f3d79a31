//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
///
/// Access and refresh tokens are signed with independent secrets and carry
/// independent expirations. The access-token TTL also bounds the lifetime of
/// the access-token cache entries, so the two age out together.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub access_secret: String,

    /// Access token expiry time in seconds
    pub access_expiry: i64,

    /// Secret key for signing refresh tokens
    pub refresh_secret: String,

    /// Refresh token expiry time in seconds
    pub refresh_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("access-secret-change-in-production"),
            access_expiry: 900,       // 15 minutes
            refresh_secret: String::from("refresh-secret-change-in-production"),
            refresh_expiry: 604_800,  // 7 days
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with explicit secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_expiry = days * 86_400;
        self
    }

    /// Check if either secret is still a default placeholder
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret.ends_with("change-in-production")
            || self.refresh_secret.ends_with("change-in-production")
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let access_secret = std::env::var("JWT_ACCESS_SECRET")
            .unwrap_or_else(|_| "access-secret-change-in-production".to_string());
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| "refresh-secret-change-in-production".to_string());
        let access_expiry = std::env::var("JWT_ACCESS_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(900);
        let refresh_expiry = std::env::var("JWT_REFRESH_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(604_800);

        Self {
            jwt: JwtConfig {
                access_secret,
                access_expiry,
                refresh_secret,
                refresh_expiry,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_expiry, 900);
        assert_eq!(config.refresh_expiry, 604_800);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("acc", "ref")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_expiry, 1800);
        assert_eq!(config.refresh_expiry, 1_209_600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_distinct_secrets() {
        let config = JwtConfig::default();
        assert_ne!(config.access_secret, config.refresh_secret);
    }
}
