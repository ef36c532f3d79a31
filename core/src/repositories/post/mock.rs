//! Mock implementation of PostRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use pl_shared::types::pagination::{Pagination, SortOrder};

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

use super::r#trait::PostRepository;

/// In-memory post repository for tests
#[derive(Default)]
pub struct MockPostRepository {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
}

impl MockPostRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        if !posts.contains_key(&post.id) {
            return Err(DomainError::not_found("post"));
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().await;
        Ok(posts.remove(&id).is_some())
    }

    async fn list(
        &self,
        author: Option<Uuid>,
        order: SortOrder,
        pagination: &Pagination,
    ) -> Result<(Vec<Post>, u64), DomainError> {
        let posts = self.posts.read().await;
        let mut matched: Vec<Post> = posts
            .values()
            .filter(|p| author.map(|a| p.user_id == a).unwrap_or(true))
            .cloned()
            .collect();

        matched.sort_by_key(|p| p.created_at);
        if order == SortOrder::Desc {
            matched.reverse();
        }

        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.per_page as usize)
            .collect();
        Ok((page, total))
    }
}
