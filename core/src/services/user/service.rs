//! Profile reads, updates, listing and account removal.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use pl_shared::types::pagination::{PaginatedResponse, Pagination};
use pl_shared::utils::validation::{is_email, is_uuid};

use crate::domain::entities::user::{ProfileUpdate, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{SessionRepository, UserListFilter, UserRepository};

/// User profile service
pub struct UserService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repository: Arc<U>,
    /// Needed for account removal, which closes every device session
    session_repository: Arc<S>,
}

impl<U, S> UserService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>, session_repository: Arc<S>) -> Self {
        Self {
            user_repository,
            session_repository,
        }
    }

    /// Fetch a user by id
    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    /// List users matching the filter
    ///
    /// The `search` term must be a UUID or an email address; anything else
    /// is rejected up front rather than passed to the storage layer.
    pub async fn list(
        &self,
        filter: UserListFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<User>> {
        if let Some(ref search) = filter.search {
            if !is_uuid(search) && !is_email(search) {
                return Err(DomainError::Validation {
                    message: "Search term must be a user id or an email address".to_string(),
                });
            }
        }
        let pagination = pagination.validate();

        let (users, total) = self.user_repository.list(&filter, &pagination).await?;
        Ok(PaginatedResponse::new(users, pagination, total))
    }

    /// Apply a partial profile update to the caller's account
    pub async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> DomainResult<User> {
        let mut user = self.get_by_id(id).await?;
        user.apply_profile_update(update);
        self.user_repository.update(user).await
    }

    /// Delete the caller's account and close every device session
    ///
    /// Posts cascade at the storage layer. The session purge runs first so
    /// a failure partway leaves the account intact rather than orphaned
    /// sessions behind a deleted user.
    pub async fn remove_account(&self, id: Uuid) -> DomainResult<()> {
        let purged = self.session_repository.delete_all_for_user(id).await?;
        let deleted = self.user_repository.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("user"));
        }
        info!(user_id = %id, sessions = purged, "account removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::session::{MockSessionRepository, SessionRepository};
    use crate::repositories::user::MockUserRepository;
    use crate::domain::entities::session::Session;
    use pl_shared::types::pagination::SortOrder;

    struct Fixture {
        service: UserService<MockUserRepository, MockSessionRepository>,
        users: Arc<MockUserRepository>,
        sessions: Arc<MockSessionRepository>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(MockUserRepository::new());
        let sessions = Arc::new(MockSessionRepository::new());
        Fixture {
            service: UserService::new(users.clone(), sessions.clone()),
            users,
            sessions,
        }
    }

    async fn seed(users: &MockUserRepository, email: &str, first: &str) -> User {
        users
            .create(User::new(email, "hash", first, "Lee"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_by_id_strips_password_hash() {
        let fx = fixture();
        let user = seed(&fx.users, "a@b.com", "Ann").await;

        let fetched = fx.service.get_by_id(user.id).await.unwrap();
        assert_eq!(fetched.id, user.id);
        assert!(fetched.password_hash.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_not_found() {
        let fx = fixture();
        assert!(matches!(
            fx.service.get_by_id(Uuid::new_v4()).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_rejects_freeform_search() {
        let fx = fixture();
        let filter = UserListFilter {
            search: Some("ann".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            fx.service.list(filter, Pagination::default()).await,
            Err(DomainError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_search_by_email_and_id() {
        let fx = fixture();
        let ann = seed(&fx.users, "ann@b.com", "Ann").await;
        seed(&fx.users, "bob@b.com", "Bob").await;

        let by_email = fx
            .service
            .list(
                UserListFilter {
                    search: Some("ann@b.com".to_string()),
                    ..Default::default()
                },
                Pagination::default(),
            )
            .await
            .unwrap();
        assert_eq!(by_email.total, 1);
        assert_eq!(by_email.data[0].id, ann.id);

        let by_id = fx
            .service
            .list(
                UserListFilter {
                    search: Some(ann.id.to_string()),
                    ..Default::default()
                },
                Pagination::default(),
            )
            .await
            .unwrap();
        assert_eq!(by_id.total, 1);
    }

    #[tokio::test]
    async fn test_list_filters_by_first_name_substring() {
        let fx = fixture();
        seed(&fx.users, "ann@b.com", "Annabel").await;
        seed(&fx.users, "bob@b.com", "Bob").await;

        let page = fx
            .service
            .list(
                UserListFilter {
                    first_name: Some("anna".to_string()),
                    order: SortOrder::Asc,
                    ..Default::default()
                },
                Pagination::default(),
            )
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].first_name, "Annabel");
    }

    #[tokio::test]
    async fn test_update_profile_is_partial() {
        let fx = fixture();
        let user = seed(&fx.users, "a@b.com", "Ann").await;

        let updated = fx
            .service
            .update_profile(
                user.id,
                ProfileUpdate {
                    city: Some("Berlin".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.city.as_deref(), Some("Berlin"));
        assert_eq!(updated.first_name, "Ann");
    }

    #[tokio::test]
    async fn test_remove_account_purges_sessions() {
        let fx = fixture();
        let user = seed(&fx.users, "a@b.com", "Ann").await;
        fx.sessions
            .save(Session::new(user.id, "d1", "t1"))
            .await
            .unwrap();
        fx.sessions
            .save(Session::new(user.id, "d2", "t2"))
            .await
            .unwrap();

        fx.service.remove_account(user.id).await.unwrap();
        assert_eq!(fx.sessions.len().await, 0);
        assert!(fx.users.find_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_unknown_account_is_not_found() {
        let fx = fixture();
        assert!(matches!(
            fx.service.remove_account(Uuid::new_v4()).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
