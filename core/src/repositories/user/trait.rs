//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use pl_shared::types::pagination::{Pagination, SortOrder};

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Filters for the paginated user listing
#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    /// Exact id or email match (pre-validated by the service layer)
    pub search: Option<String>,
    /// Case-insensitive substring match on first name
    pub first_name: Option<String>,
    /// Case-insensitive substring match on last name
    pub last_name: Option<String>,
    /// Case-insensitive substring match on city
    pub city: Option<String>,
    /// Ordering by creation time
    pub order: SortOrder,
}

/// Repository trait for User entity persistence operations
///
/// Implementations must never return the password hash from the default
/// read paths; only `find_by_email_with_password` selects it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id (password hash excluded)
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email, case-insensitively (password hash excluded)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by email with the password hash selected, for sign-in
    async fn find_by_email_with_password(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// Returns `Conflict` when the email is already registered, including
    /// when a concurrent writer won the check/insert race.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user; sessions and posts cascade at the storage layer
    ///
    /// Returns `Ok(true)` when a row was removed, `Ok(false)` when the user
    /// did not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List users matching a filter, newest or oldest first
    ///
    /// Returns the page of users plus the total match count.
    async fn list(
        &self,
        filter: &UserListFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError>;
}
