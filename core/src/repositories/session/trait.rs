//! Session repository trait: persistence of refresh sessions.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Repository trait for refresh session persistence
///
/// The store holds at most one live session per (user, device) pair;
/// `save` replaces any existing row for the pair so concurrent rotations
/// converge to a single session instead of leaving duplicates.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a session, replacing any existing row for the same (user, device)
    async fn save(&self, session: Session) -> Result<Session, DomainError>;

    /// Delete the session for a (user, device) pair; absent rows are fine
    async fn delete_by_user_device(&self, user_id: Uuid, device_id: &str) -> Result<bool, DomainError>;

    /// Delete every session belonging to a user
    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Positive existence check for a refresh token string
    async fn token_exists(&self, refresh_token: &str) -> Result<bool, DomainError>;

    /// Find the live session for a (user, device) pair
    async fn find_by_user_device(
        &self,
        user_id: Uuid,
        device_id: &str,
    ) -> Result<Option<Session>, DomainError>;
}
