//! Post request DTOs

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use pl_core::domain::entities::post::PostCategory;
use pl_core::errors::DomainError;
use pl_core::services::post::PostUpdate;
use pl_shared::types::pagination::{Pagination, SortOrder};

/// Request body for POST /api/v1/posts
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
    pub category: String,
}

impl CreatePostRequest {
    /// Parse the category string; unknown values are a validation error
    pub fn category(&self) -> Result<PostCategory, DomainError> {
        PostCategory::from_str(&self.category)
    }
}

/// Request body for PUT /api/v1/posts/{id}
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub content: Option<String>,
    pub category: Option<String>,
}

impl UpdatePostRequest {
    /// Convert into the service-level partial update
    pub fn into_update(self) -> Result<PostUpdate, DomainError> {
        let category = self
            .category
            .as_deref()
            .map(PostCategory::from_str)
            .transpose()?;
        Ok(PostUpdate {
            title: self.title,
            content: self.content,
            category,
        })
    }
}

/// Query parameters for the post listings
#[derive(Debug, Clone, Deserialize)]
pub struct PostListQuery {
    #[serde(default)]
    pub order: SortOrder,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PostListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page.unwrap_or(1), self.per_page.unwrap_or(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_parses_category() {
        let request = CreatePostRequest {
            title: "t".to_string(),
            content: "c".to_string(),
            category: "Technology".to_string(),
        };
        assert_eq!(request.category().unwrap(), PostCategory::Technology);

        let bad = CreatePostRequest {
            category: "gardening".to_string(),
            ..request
        };
        assert!(bad.category().is_err());
    }

    #[test]
    fn test_update_request_with_no_category_is_empty_update() {
        let update = UpdatePostRequest {
            title: Some("new".to_string()),
            content: None,
            category: None,
        }
        .into_update()
        .unwrap();
        assert_eq!(update.title.as_deref(), Some("new"));
        assert!(update.category.is_none());
    }

    #[test]
    fn test_title_length_bounds() {
        let request = CreatePostRequest {
            title: "x".repeat(201),
            content: "c".to_string(),
            category: "health".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
