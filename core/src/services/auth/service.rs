//! Session orchestrator: sign-up, sign-in, refresh, logout, and the two
//! identity-resolution guards.
//!
//! State per (user, device): NoSession -> Active (refresh row + cache entry
//! both present) -> NoSession after logout, or Active again after rotation.
//! Rotation is delete-then-insert in two round trips; a crash in between
//! leaves a session gap (the user re-authenticates) rather than a stale
//! live session.

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::domain::entities::token::{TokenPair, TokenType};
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, AuthenticatedUser};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{SessionRepository, TokenCache, UserRepository};
use crate::services::token::TokenService;

use super::password::{hash_password, verify_password};

/// Input for registration
#[derive(Debug, Clone)]
pub struct SignUpData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub device_id: String,
}

/// Authentication service composing the credential store, token issuer,
/// refresh session store and access-token cache
pub struct AuthService<U, S, C>
where
    U: UserRepository,
    S: SessionRepository,
    C: TokenCache,
{
    /// User repository for credential and profile reads
    user_repository: Arc<U>,
    /// Refresh session store
    session_repository: Arc<S>,
    /// Access-token cache for early revocation
    token_cache: Arc<C>,
    /// JWT issuer/verifier
    token_service: Arc<TokenService>,
}

impl<U, S, C> AuthService<U, S, C>
where
    U: UserRepository,
    S: SessionRepository,
    C: TokenCache,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        session_repository: Arc<S>,
        token_cache: Arc<C>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            token_cache,
            token_service,
        }
    }

    /// Register a new account and open a session for the device
    ///
    /// Fails with `EmailTaken` when the email is already registered
    /// (case-insensitively). The uniqueness check and the insert are two
    /// operations; the storage layer additionally maps a unique-key
    /// violation to `Conflict` so a concurrent duplicate still surfaces
    /// as 409 rather than an internal error.
    pub async fn sign_up(&self, data: SignUpData) -> DomainResult<AuthResponse> {
        if self.user_repository.find_by_email(&data.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&data.password)?;
        let mut user = User::new(data.email, password_hash, data.first_name, data.last_name);
        user.age = data.age;
        user.city = data.city;
        let user = self.user_repository.create(user).await?;

        let pair = self.token_service.issue_pair(user.id, &data.device_id)?;
        self.persist_session(user.id, &data.device_id, &pair).await?;

        Ok(AuthResponse::new(user, pair))
    }

    /// Authenticate with credentials and rotate the device session
    ///
    /// Unknown email and wrong password produce the same error so callers
    /// cannot probe which check failed.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        device_id: &str,
    ) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email_with_password(email)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let digest = user
            .password_hash
            .as_deref()
            .ok_or_else(|| DomainError::internal("Credential read missing password hash"))?;
        if !verify_password(password, digest)? {
            return Err(AuthError::AuthenticationFailed.into());
        }

        self.drop_session(user.id, device_id).await?;

        let pair = self.token_service.issue_pair(user.id, device_id)?;
        self.persist_session(user.id, device_id, &pair).await?;

        Ok(AuthResponse::new(user, pair))
    }

    /// Rotate the session for an already-resolved refresh identity
    ///
    /// The caller must have passed the refresh guard
    /// (`resolve_refresh_token`) first.
    pub async fn refresh(&self, identity: &AuthenticatedUser) -> DomainResult<TokenPair> {
        self.drop_session(identity.user_id, &identity.device_id).await?;

        let pair = self
            .token_service
            .issue_pair(identity.user_id, &identity.device_id)?;
        self.persist_session(identity.user_id, &identity.device_id, &pair).await?;

        Ok(pair)
    }

    /// Close the session for the device; idempotent
    pub async fn logout(&self, identity: &AuthenticatedUser) -> DomainResult<()> {
        self.drop_session(identity.user_id, &identity.device_id).await
    }

    /// Access-token guard: resolve a bearer access token to an identity
    ///
    /// Verifies the signature/expiry, requires the token to still be in the
    /// live cache set for its (user, device) pair, and requires the user to
    /// exist. Each step fails with a distinct internal message but the same
    /// `Unauthorized` outcome.
    pub async fn resolve_access_token(&self, token: &str) -> DomainResult<AuthenticatedUser> {
        let claims = self
            .token_service
            .verify(token, TokenType::Access)
            .map_err(|_| {
                debug!("access guard: token failed verification");
                DomainError::Unauthorized
            })?;
        let user_id = claims.user_id().map_err(|_| {
            debug!("access guard: claims missing user id");
            DomainError::Unauthorized
        })?;

        let live = self
            .token_cache
            .token_exists(user_id, &claims.device_id, token)
            .await?;
        if !live {
            debug!(%user_id, "access guard: token revoked or unknown");
            return Err(DomainError::Unauthorized);
        }

        if self.user_repository.find_by_id(user_id).await?.is_none() {
            debug!(%user_id, "access guard: user not found");
            return Err(DomainError::Unauthorized);
        }

        Ok(AuthenticatedUser::new(user_id, claims.device_id))
    }

    /// Refresh-token guard: resolve a bearer refresh token to an identity
    ///
    /// Beyond signature/expiry, the token must still exist in the session
    /// store, i.e. not have been rotated away or logged out.
    pub async fn resolve_refresh_token(&self, token: &str) -> DomainResult<AuthenticatedUser> {
        let claims = self
            .token_service
            .verify(token, TokenType::Refresh)
            .map_err(|_| {
                debug!("refresh guard: token failed verification");
                DomainError::Unauthorized
            })?;
        let user_id = claims.user_id().map_err(|_| DomainError::Unauthorized)?;

        if !self.session_repository.token_exists(token).await? {
            debug!(%user_id, "refresh guard: session no longer present");
            return Err(DomainError::Unauthorized);
        }

        if self.user_repository.find_by_id(user_id).await?.is_none() {
            debug!(%user_id, "refresh guard: user not found");
            return Err(DomainError::Unauthorized);
        }

        Ok(AuthenticatedUser::new(user_id, claims.device_id))
    }

    /// Persist both session artifacts concurrently
    ///
    /// The two writes are joined, not ordered, and there is no cross-store
    /// transaction: a failure in one does not roll back the other. A
    /// half-landed pair surfaces later as Unauthorized.
    async fn persist_session(
        &self,
        user_id: Uuid,
        device_id: &str,
        pair: &TokenPair,
    ) -> DomainResult<()> {
        let session = Session::new(user_id, device_id, pair.refresh_token.clone());
        let (row, cache) = tokio::join!(
            self.session_repository.save(session),
            self.token_cache.save_token(user_id, device_id, &pair.access_token),
        );
        row?;
        cache?;
        Ok(())
    }

    /// Delete both session artifacts concurrently; absent rows are fine
    async fn drop_session(&self, user_id: Uuid, device_id: &str) -> DomainResult<()> {
        let (row, cache) = tokio::join!(
            self.session_repository.delete_by_user_device(user_id, device_id),
            self.token_cache.delete_tokens(user_id, device_id),
        );
        row?;
        cache?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::session::MockSessionRepository;
    use crate::repositories::token_cache::MockTokenCache;
    use crate::repositories::user::MockUserRepository;
    use crate::services::token::TokenServiceConfig;

    type TestAuthService = AuthService<MockUserRepository, MockSessionRepository, MockTokenCache>;

    struct Fixture {
        auth: TestAuthService,
        users: Arc<MockUserRepository>,
        sessions: Arc<MockSessionRepository>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(MockUserRepository::new());
        let sessions = Arc::new(MockSessionRepository::new());
        let cache = Arc::new(MockTokenCache::new());
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::for_tests()).unwrap());
        Fixture {
            auth: AuthService::new(users.clone(), sessions.clone(), cache, tokens),
            users,
            sessions,
        }
    }

    fn sign_up_data(email: &str, device: &str) -> SignUpData {
        SignUpData {
            email: email.to_string(),
            password: "Passw0rd!".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            age: None,
            city: None,
            device_id: device.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_returns_pair_and_access_guard_accepts_it() {
        let fx = fixture();
        let response = fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();

        assert!(!response.access_token.is_empty());
        assert!(!response.refresh_token.is_empty());

        let identity = fx.auth.resolve_access_token(&response.access_token).await.unwrap();
        assert_eq!(identity.user_id, response.user.id);
        assert_eq!(identity.device_id, "d1");
    }

    #[tokio::test]
    async fn test_sign_up_stores_optional_profile_fields() {
        let fx = fixture();
        let mut data = sign_up_data("a@b.com", "d1");
        data.age = Some(30);
        data.city = Some("Berlin".to_string());

        let response = fx.auth.sign_up(data).await.unwrap();
        assert_eq!(response.user.age, Some(30));
        assert_eq!(response.user.city.as_deref(), Some("Berlin"));

        let stored = fx.users.find_by_id(response.user.id).await.unwrap().unwrap();
        assert_eq!(stored.age, Some(30));
        assert_eq!(stored.city.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email_is_conflict_and_creates_nothing() {
        let fx = fixture();
        fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();

        let err = fx.auth.sign_up(sign_up_data("A@B.COM", "d2")).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::EmailTaken)));
        assert_eq!(fx.users.len().await, 1);
        assert_eq!(fx.sessions.len().await, 1);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_and_unknown_email_look_identical() {
        let fx = fixture();
        fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();

        let wrong_password = fx.auth.sign_in("a@b.com", "nope12345", "d1").await.unwrap_err();
        let unknown_email = fx.auth.sign_in("x@y.com", "Passw0rd!", "d1").await.unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, DomainError::Auth(AuthError::AuthenticationFailed)));
        assert!(matches!(unknown_email, DomainError::Auth(AuthError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn test_sign_in_rotates_prior_device_session() {
        let fx = fixture();
        let first = fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();
        let second = fx.auth.sign_in("a@b.com", "Passw0rd!", "d1").await.unwrap();

        assert!(fx.auth.resolve_access_token(&first.access_token).await.is_err());
        assert!(fx.auth.resolve_refresh_token(&first.refresh_token).await.is_err());
        assert!(fx.auth.resolve_access_token(&second.access_token).await.is_ok());
        assert_eq!(fx.sessions.len().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent_per_device() {
        let fx = fixture();
        let d1 = fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();
        let d2 = fx.auth.sign_in("a@b.com", "Passw0rd!", "d2").await.unwrap();

        // Signing in on d2 must not disturb d1
        assert!(fx.auth.resolve_access_token(&d1.access_token).await.is_ok());
        assert!(fx.auth.resolve_access_token(&d2.access_token).await.is_ok());
        assert_eq!(fx.sessions.len().await, 2);
    }

    #[tokio::test]
    async fn test_logout_revokes_both_tokens_and_is_idempotent() {
        let fx = fixture();
        let response = fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();
        let identity = AuthenticatedUser::new(response.user.id, "d1");

        fx.auth.logout(&identity).await.unwrap();
        assert!(fx.auth.resolve_access_token(&response.access_token).await.is_err());
        assert!(fx.auth.resolve_refresh_token(&response.refresh_token).await.is_err());

        // A second logout of the same session is not an error
        fx.auth.logout(&identity).await.unwrap();
    }

    #[tokio::test]
    async fn test_refresh_invalidates_previous_pair_only() {
        let fx = fixture();
        let initial = fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();
        let identity = fx.auth.resolve_refresh_token(&initial.refresh_token).await.unwrap();

        let first = fx.auth.refresh(&identity).await.unwrap();
        assert!(fx.auth.resolve_refresh_token(&initial.refresh_token).await.is_err());
        assert!(fx.auth.resolve_access_token(&initial.access_token).await.is_err());

        let identity = fx.auth.resolve_refresh_token(&first.refresh_token).await.unwrap();
        let second = fx.auth.refresh(&identity).await.unwrap();

        // Pairs from two rotations ago stay rejected, the newest works
        assert!(fx.auth.resolve_refresh_token(&initial.refresh_token).await.is_err());
        assert!(fx.auth.resolve_refresh_token(&first.refresh_token).await.is_err());
        assert!(fx.auth.resolve_access_token(&first.access_token).await.is_err());
        assert!(fx.auth.resolve_access_token(&second.access_token).await.is_ok());
        assert!(fx.auth.resolve_refresh_token(&second.refresh_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_access_guard_rejects_refresh_token() {
        let fx = fixture();
        let response = fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();
        assert!(fx.auth.resolve_access_token(&response.refresh_token).await.is_err());
    }

    #[tokio::test]
    async fn test_access_guard_rejects_token_for_deleted_user() {
        let fx = fixture();
        let response = fx.auth.sign_up(sign_up_data("a@b.com", "d1")).await.unwrap();
        fx.users.delete(response.user.id).await.unwrap();

        assert!(matches!(
            fx.auth.resolve_access_token(&response.access_token).await,
            Err(DomainError::Unauthorized)
        ));
    }
}
