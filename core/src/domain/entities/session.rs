//! Refresh session entity: one row per active (user, device) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A refresh session binds a refresh token to a (user, device) pair.
///
/// At most one live session exists per pair; rotation deletes the previous
/// row before (or while) inserting the replacement. The token string itself
/// is stored so the refresh guard can do a positive existence check rather
/// than relying on signature validity alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the session row
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Opaque client-supplied device identifier
    pub device_id: String,

    /// The currently valid refresh token for this pair
    pub refresh_token: String,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session for a (user, device) pair
    pub fn new(user_id: Uuid, device_id: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            device_id: device_id.into(),
            refresh_token: refresh_token.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let user_id = Uuid::new_v4();
        let session = Session::new(user_id, "device-1", "token-abc");
        assert_eq!(session.user_id, user_id);
        assert_eq!(session.device_id, "device-1");
        assert_eq!(session.refresh_token, "token-abc");
    }
}
