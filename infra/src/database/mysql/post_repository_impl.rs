//! MySQL implementation of the PostRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use pl_core::domain::entities::post::{Post, PostCategory};
use pl_core::errors::DomainError;
use pl_core::repositories::PostRepository;
use pl_shared::types::pagination::{Pagination, SortOrder};

use super::map_db_err;

const POST_COLUMNS: &str = "id, user_id, title, content, category, likes, views, \
                            comments_count, created_at, updated_at";

/// MySQL implementation of PostRepository
pub struct MySqlPostRepository {
    pool: MySqlPool,
}

impl MySqlPostRepository {
    /// Create a new MySQL post repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &sqlx::mysql::MySqlRow) -> Result<Post, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| map_db_err("Failed to read post id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| map_db_err("Failed to read post user_id", e))?;
        let category: String = row
            .try_get("category")
            .map_err(|e| map_db_err("Failed to read category", e))?;

        Ok(Post {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid post UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            title: row
                .try_get("title")
                .map_err(|e| map_db_err("Failed to read title", e))?,
            content: row
                .try_get("content")
                .map_err(|e| map_db_err("Failed to read content", e))?,
            category: PostCategory::from_str(&category)
                .map_err(|_| DomainError::internal(format!("Unknown stored category: {}", category)))?,
            likes: row
                .try_get("likes")
                .map_err(|e| map_db_err("Failed to read likes", e))?,
            views: row
                .try_get("views")
                .map_err(|e| map_db_err("Failed to read views", e))?,
            comments_count: row
                .try_get("comments_count")
                .map_err(|e| map_db_err("Failed to read comments_count", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| map_db_err("Failed to read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| map_db_err("Failed to read updated_at", e))?,
        })
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let query = format!("SELECT {} FROM posts WHERE id = ? LIMIT 1", POST_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to find post", e))?;

        row.map(|r| Self::row_to_post(&r)).transpose()
    }

    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            INSERT INTO posts (
                id, user_id, title, content, category,
                likes, views, comments_count, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(post.id.to_string())
            .bind(post.user_id.to_string())
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.category.to_string())
            .bind(post.likes)
            .bind(post.views)
            .bind(post.comments_count)
            .bind(post.created_at)
            .bind(post.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to create post", e))?;

        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            UPDATE posts SET
                title = ?, content = ?, category = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.category.to_string())
            .bind(post.updated_at)
            .bind(post.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to update post", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("post"));
        }

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to delete post", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        author: Option<Uuid>,
        order: SortOrder,
        pagination: &Pagination,
    ) -> Result<(Vec<Post>, u64), DomainError> {
        let where_clause = if author.is_some() { " WHERE user_id = ?" } else { "" };

        let count_query = format!("SELECT COUNT(*) as total FROM posts{}", where_clause);
        let mut count = sqlx::query(&count_query);
        if let Some(author) = author {
            count = count.bind(author.to_string());
        }
        let count_row = count
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to count posts", e))?;
        let total: i64 = count_row
            .try_get("total")
            .map_err(|e| map_db_err("Failed to read post count", e))?;

        let page_query = format!(
            "SELECT {} FROM posts{} ORDER BY created_at {} LIMIT ? OFFSET ?",
            POST_COLUMNS,
            where_clause,
            order.as_sql()
        );
        let mut page = sqlx::query(&page_query);
        if let Some(author) = author {
            page = page.bind(author.to_string());
        }
        let rows = page
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to list posts", e))?;

        let posts = rows
            .iter()
            .map(Self::row_to_post)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((posts, total as u64))
    }
}
