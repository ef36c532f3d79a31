//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::user::User;
use pl_core::errors::DomainError;
use pl_core::repositories::{UserListFilter, UserRepository};
use pl_shared::types::pagination::Pagination;

use super::map_db_err;

/// Columns selected by every read; the password hash is fetched only by
/// the credential query.
const USER_COLUMNS: &str = "id, email, first_name, last_name, avatar, age, city, bio, \
                            created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow, with_password: bool) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| map_db_err("Failed to read user id", e))?;
        let password_hash = if with_password {
            row.try_get("password_hash")
                .map_err(|e| map_db_err("Failed to read password_hash", e))?
        } else {
            None
        };

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| map_db_err("Failed to read email", e))?,
            password_hash,
            first_name: row
                .try_get("first_name")
                .map_err(|e| map_db_err("Failed to read first_name", e))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| map_db_err("Failed to read last_name", e))?,
            avatar: row
                .try_get("avatar")
                .map_err(|e| map_db_err("Failed to read avatar", e))?,
            age: row
                .try_get("age")
                .map_err(|e| map_db_err("Failed to read age", e))?,
            city: row
                .try_get("city")
                .map_err(|e| map_db_err("Failed to read city", e))?,
            bio: row
                .try_get("bio")
                .map_err(|e| map_db_err("Failed to read bio", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| map_db_err("Failed to read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| map_db_err("Failed to read updated_at", e))?,
        })
    }

    /// WHERE clause and bind values for a listing filter
    ///
    /// The search term is matched exactly against id or email; name and
    /// city filters are case-insensitive substring matches.
    fn filter_conditions(filter: &UserListFilter) -> (String, Vec<String>) {
        let mut clauses: Vec<&str> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(ref search) = filter.search {
            clauses.push("(id = ? OR email = ?)");
            binds.push(search.clone());
            binds.push(search.to_lowercase());
        }
        if let Some(ref first_name) = filter.first_name {
            clauses.push("LOWER(first_name) LIKE ?");
            binds.push(format!("%{}%", first_name.to_lowercase()));
        }
        if let Some(ref last_name) = filter.last_name {
            clauses.push("LOWER(last_name) LIKE ?");
            binds.push(format!("%{}%", last_name.to_lowercase()));
        }
        if let Some(ref city) = filter.city {
            clauses.push("LOWER(city) LIKE ?");
            binds.push(format!("%{}%", city.to_lowercase()));
        }

        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        (where_clause, binds)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to find user by id", e))?;

        row.map(|r| Self::row_to_user(&r, false)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email.to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to find user by email", e))?;

        row.map(|r| Self::row_to_user(&r, false)).transpose()
    }

    async fn find_by_email_with_password(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {}, password_hash FROM users WHERE email = ? LIMIT 1",
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(email.to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to find user credentials", e))?;

        row.map(|r| Self::row_to_user(&r, true)).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, password_hash, first_name, last_name,
                avatar, age, city, bio, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.avatar)
            .bind(user.age)
            .bind(&user.city)
            .bind(&user.bio)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to create user", e))?;

        Ok(user.without_password())
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                first_name = ?, last_name = ?, avatar = ?,
                age = ?, city = ?, bio = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.avatar)
            .bind(user.age)
            .bind(&user.city)
            .bind(&user.bio)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user"));
        }

        Ok(user.without_password())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        // Sessions and posts go with the user via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        filter: &UserListFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError> {
        let (where_clause, binds) = Self::filter_conditions(filter);

        let count_query = format!("SELECT COUNT(*) as total FROM users{}", where_clause);
        let mut count = sqlx::query(&count_query);
        for bind in &binds {
            count = count.bind(bind);
        }
        let count_row = count
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to count users", e))?;
        let total: i64 = count_row
            .try_get("total")
            .map_err(|e| map_db_err("Failed to read user count", e))?;

        let page_query = format!(
            "SELECT {} FROM users{} ORDER BY created_at {} LIMIT ? OFFSET ?",
            USER_COLUMNS,
            where_clause,
            filter.order.as_sql()
        );
        let mut page = sqlx::query(&page_query);
        for bind in &binds {
            page = page.bind(bind);
        }
        let rows = page
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to list users", e))?;

        let users = rows
            .iter()
            .map(|r| Self::row_to_user(r, false))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total as u64))
    }
}
