//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

use super::r#trait::SessionRepository;

/// In-memory session store keyed by (user, device)
#[derive(Default)]
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<(Uuid, String), Session>>>,
}

impl MockSessionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn save(&self, session: Session) -> Result<Session, DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert((session.user_id, session.device_id.clone()), session.clone());
        Ok(session)
    }

    async fn delete_by_user_device(&self, user_id: Uuid, device_id: &str) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(&(user_id, device_id.to_string())).is_some())
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|(uid, _), _| *uid != user_id);
        Ok(before - sessions.len())
    }

    async fn token_exists(&self, refresh_token: &str) -> Result<bool, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.values().any(|s| s.refresh_token == refresh_token))
    }

    async fn find_by_user_device(
        &self,
        user_id: Uuid,
        device_id: &str,
    ) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&(user_id, device_id.to_string())).cloned())
    }
}
