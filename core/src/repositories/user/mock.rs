//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use pl_shared::types::pagination::{Pagination, SortOrder};

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::{UserListFilter, UserRepository};

/// In-memory user repository for tests
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned().map(User::without_password))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .find_by_email_with_password(email)
            .await?
            .map(User::without_password))
    }

    async fn find_by_email_with_password(&self, email: &str) -> Result<Option<User>, DomainError> {
        let needle = email.to_lowercase();
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == needle).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                message: "Email already registered".to_string(),
            });
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("user"));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn list(
        &self,
        filter: &UserListFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError> {
        let users = self.users.read().await;
        let mut matched: Vec<User> = users
            .values()
            .filter(|u| {
                if let Some(ref search) = filter.search {
                    let by_id = u.id.to_string() == *search;
                    let by_email = u.email == search.to_lowercase();
                    if !by_id && !by_email {
                        return false;
                    }
                }
                let contains = |field: &str, needle: &Option<String>| {
                    needle
                        .as_ref()
                        .map(|n| field.to_lowercase().contains(&n.to_lowercase()))
                        .unwrap_or(true)
                };
                contains(&u.first_name, &filter.first_name)
                    && contains(&u.last_name, &filter.last_name)
                    && contains(u.city.as_deref().unwrap_or(""), &filter.city)
            })
            .cloned()
            .map(User::without_password)
            .collect();

        matched.sort_by_key(|u| u.created_at);
        if filter.order == SortOrder::Desc {
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
