//! MySQL implementation of the SessionRepository trait.
//!
//! The sessions table carries a UNIQUE key over (user_id, device_id), so
//! `save` is an upsert: a rotation that races another writer for the same
//! pair converges on a single row instead of erroring.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::session::Session;
use pl_core::errors::DomainError;
use pl_core::repositories::SessionRepository;

use super::map_db_err;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| map_db_err("Failed to read session id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| map_db_err("Failed to read session user_id", e))?;

        Ok(Session {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid session UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            device_id: row
                .try_get("device_id")
                .map_err(|e| map_db_err("Failed to read device_id", e))?,
            refresh_token: row
                .try_get("refresh_token")
                .map_err(|e| map_db_err("Failed to read refresh_token", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| map_db_err("Failed to read created_at", e))?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn save(&self, session: Session) -> Result<Session, DomainError> {
        let query = r#"
            INSERT INTO sessions (id, user_id, device_id, refresh_token, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                id = VALUES(id),
                refresh_token = VALUES(refresh_token),
                created_at = VALUES(created_at)
        "#;

        sqlx::query(query)
            .bind(session.id.to_string())
            .bind(session.user_id.to_string())
            .bind(&session.device_id)
            .bind(&session.refresh_token)
            .bind(session.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to save session", e))?;

        Ok(session)
    }

    async fn delete_by_user_device(&self, user_id: Uuid, device_id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ? AND device_id = ?")
            .bind(user_id.to_string())
            .bind(device_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to delete session", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to delete user sessions", e))?;

        Ok(result.rows_affected() as usize)
    }

    async fn token_exists(&self, refresh_token: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM sessions WHERE refresh_token = ?
            ) as token_exists
        "#;

        let row = sqlx::query(query)
            .bind(refresh_token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to check refresh token", e))?;

        let exists: i8 = row
            .try_get("token_exists")
            .map_err(|e| map_db_err("Failed to read existence result", e))?;

        Ok(exists == 1)
    }

    async fn find_by_user_device(
        &self,
        user_id: Uuid,
        device_id: &str,
    ) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, device_id, refresh_token, created_at
            FROM sessions
            WHERE user_id = ? AND device_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(device_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to find session", e))?;

        row.map(|r| Self::row_to_session(&r)).transpose()
    }
}
