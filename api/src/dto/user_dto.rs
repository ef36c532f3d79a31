//! User request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use pl_core::domain::entities::user::ProfileUpdate;
use pl_core::repositories::UserListFilter;
use pl_shared::types::pagination::{Pagination, SortOrder};

/// Request body for PUT /api/v1/users/me
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 500))]
    pub avatar: Option<String>,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i32>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            first_name: req.first_name,
            last_name: req.last_name,
            avatar: req.avatar,
            age: req.age,
            city: req.city,
            bio: req.bio,
        }
    }
}

/// Query parameters for GET /api/v1/users
///
/// page/per_page stay flat; the urlencoded deserializer cannot handle
/// numeric fields behind serde(flatten).
#[derive(Debug, Clone, Deserialize)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl UserListQuery {
    /// Split into the repository filter and pagination
    pub fn into_parts(self) -> (UserListFilter, Pagination) {
        (
            UserListFilter {
                search: self.search,
                first_name: self.first_name,
                last_name: self.last_name,
                city: self.city,
                order: self.order,
            },
            Pagination::new(self.page.unwrap_or(1), self.per_page.unwrap_or(10)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_maps_to_profile_update() {
        let update: ProfileUpdate = UpdateProfileRequest {
            first_name: None,
            last_name: None,
            avatar: None,
            age: Some(30),
            city: Some("Berlin".to_string()),
            bio: None,
        }
        .into();
        assert_eq!(update.age, Some(30));
        assert_eq!(update.city.as_deref(), Some("Berlin"));
        assert!(update.first_name.is_none());
    }

    #[test]
    fn test_age_bounds() {
        let request = UpdateProfileRequest {
            first_name: None,
            last_name: None,
            avatar: None,
            age: Some(200),
            city: None,
            bio: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_list_query_defaults() {
        let query: UserListQuery = serde_json::from_str("{}").unwrap();
        let (filter, pagination) = query.into_parts();
        assert!(filter.search.is_none());
        assert_eq!(filter.order, SortOrder::Asc);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 10);
    }
}
