//! Post CRUD with ownership enforcement.
//!
//! Reads are open to any authenticated caller; writes require authorship.
//! The existence check runs before the ownership check so a missing post is
//! 404 and someone else's post is 403, never the other way around.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use pl_shared::types::pagination::{PaginatedResponse, Pagination, SortOrder};

use crate::domain::entities::post::{Post, PostCategory};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PostRepository;

/// Partial post update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<PostCategory>,
}

/// Post service
pub struct PostService<P>
where
    P: PostRepository,
{
    post_repository: Arc<P>,
}

impl<P> PostService<P>
where
    P: PostRepository,
{
    /// Create a new post service
    pub fn new(post_repository: Arc<P>) -> Self {
        Self { post_repository }
    }

    /// Create a post authored by `user_id`
    pub async fn create(
        &self,
        user_id: Uuid,
        title: String,
        content: String,
        category: PostCategory,
    ) -> DomainResult<Post> {
        self.post_repository
            .create(Post::new(user_id, title, content, category))
            .await
    }

    /// Fetch a post by id
    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Post> {
        self.post_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("post"))
    }

    /// List posts newest or oldest first, optionally for a single author
    pub async fn list(
        &self,
        author: Option<Uuid>,
        order: SortOrder,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Post>> {
        let pagination = pagination.validate();
        let (posts, total) = self.post_repository.list(author, order, &pagination).await?;
        Ok(PaginatedResponse::new(posts, pagination, total))
    }

    /// Apply a partial update to a post the actor owns
    pub async fn update(
        &self,
        actor: Uuid,
        post_id: Uuid,
        update: PostUpdate,
    ) -> DomainResult<Post> {
        let mut post = self.owned_post(actor, post_id).await?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(category) = update.category {
            post.category = category;
        }
        post.updated_at = Utc::now();

        self.post_repository.update(post).await
    }

    /// Delete a post the actor owns
    pub async fn delete(&self, actor: Uuid, post_id: Uuid) -> DomainResult<()> {
        let post = self.owned_post(actor, post_id).await?;
        self.post_repository.delete(post.id).await?;
        Ok(())
    }

    async fn owned_post(&self, actor: Uuid, post_id: Uuid) -> DomainResult<Post> {
        let post = self.get_by_id(post_id).await?;
        if !post.is_owned_by(actor) {
            return Err(DomainError::Forbidden {
                message: "Only the author may modify this post".to_string(),
            });
        }
        Ok(post)
    }
}
