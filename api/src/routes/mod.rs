//! Route handlers and shared application state

pub mod auth;
pub mod posts;
pub mod users;

use std::sync::Arc;

use pl_core::repositories::{PostRepository, SessionRepository, TokenCache, UserRepository};
use pl_core::services::auth::AuthService;
use pl_core::services::post::PostService;
use pl_core::services::user::UserService;

/// Application state holding the shared services
pub struct AppState<U, S, C, P>
where
    U: UserRepository,
    S: SessionRepository,
    C: TokenCache,
    P: PostRepository,
{
    pub auth_service: Arc<AuthService<U, S, C>>,
    pub user_service: Arc<UserService<U, S>>,
    pub post_service: Arc<PostService<P>>,
}
