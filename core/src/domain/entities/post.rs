//! Post entity: a user-owned article with engagement counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::DomainError;

/// Closed set of post categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Technology,
    Lifestyle,
    Health,
    Finance,
    Entertainment,
}

impl FromStr for PostCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "technology" => Ok(PostCategory::Technology),
            "lifestyle" => Ok(PostCategory::Lifestyle),
            "health" => Ok(PostCategory::Health),
            "finance" => Ok(PostCategory::Finance),
            "entertainment" => Ok(PostCategory::Entertainment),
            other => Err(DomainError::Validation {
                message: format!("Invalid category: {}", other),
            }),
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PostCategory::Technology => "technology",
            PostCategory::Lifestyle => "lifestyle",
            PostCategory::Health => "health",
            PostCategory::Finance => "finance",
            PostCategory::Entertainment => "entertainment",
        };
        f.write_str(s)
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for the post
    pub id: Uuid,

    /// Authoring user
    pub user_id: Uuid,

    /// Title
    pub title: String,

    /// Body content
    pub content: String,

    /// Category
    pub category: PostCategory,

    /// Like counter
    pub likes: i32,

    /// View counter
    pub views: i32,

    /// Comment counter
    pub comments_count: i32,

    /// Timestamp when the post was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the post was last updated
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Creates a new post owned by `user_id`
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        content: impl Into<String>,
        category: PostCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            content: content.into(),
            category,
            likes: 0,
            views: 0,
            comments_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` is the author of this post
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("Technology".parse::<PostCategory>().unwrap(), PostCategory::Technology);
        assert_eq!("finance".parse::<PostCategory>().unwrap(), PostCategory::Finance);
        assert!("gardening".parse::<PostCategory>().is_err());
    }

    #[test]
    fn test_category_display_round_trip() {
        for cat in [
            PostCategory::Technology,
            PostCategory::Lifestyle,
            PostCategory::Health,
            PostCategory::Finance,
            PostCategory::Entertainment,
        ] {
            assert_eq!(cat.to_string().parse::<PostCategory>().unwrap(), cat);
        }
    }

    #[test]
    fn test_new_post_counters_start_at_zero() {
        let post = Post::new(Uuid::new_v4(), "t", "c", PostCategory::Health);
        assert_eq!(post.likes, 0);
        assert_eq!(post.views, 0);
        assert_eq!(post.comments_count, 0);
    }

    #[test]
    fn test_ownership() {
        let owner = Uuid::new_v4();
        let post = Post::new(owner, "t", "c", PostCategory::Health);
        assert!(post.is_owned_by(owner));
        assert!(!post.is_owned_by(Uuid::new_v4()));
    }
}
