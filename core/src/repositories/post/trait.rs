//! Post repository trait defining the interface for post persistence.

use async_trait::async_trait;
use uuid::Uuid;

use pl_shared::types::pagination::{Pagination, SortOrder};

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

/// Repository trait for Post entity persistence operations
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// Create a new post
    async fn create(&self, post: Post) -> Result<Post, DomainError>;

    /// Update an existing post
    async fn update(&self, post: Post) -> Result<Post, DomainError>;

    /// Delete a post by id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List posts ordered by creation time, optionally restricted to an author
    ///
    /// Returns the page of posts plus the total match count.
    async fn list(
        &self,
        author: Option<Uuid>,
        order: SortOrder,
        pagination: &Pagination,
    ) -> Result<(Vec<Post>, u64), DomainError>;
}
