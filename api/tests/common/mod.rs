//! Shared fixtures for the HTTP integration tests: the full app wired
//! against the in-memory mock repositories.

use actix_web::web;
use std::sync::Arc;

use pl_api::middleware::IdentityResolver;
use pl_api::routes::AppState;
use pl_core::repositories::post::MockPostRepository;
use pl_core::repositories::session::MockSessionRepository;
use pl_core::repositories::token_cache::MockTokenCache;
use pl_core::repositories::user::MockUserRepository;
use pl_core::services::auth::AuthService;
use pl_core::services::post::PostService;
use pl_core::services::token::TokenService;
use pl_core::services::user::UserService;
use pl_shared::config::JwtConfig;

pub type MockState = AppState<MockUserRepository, MockSessionRepository, MockTokenCache, MockPostRepository>;

/// Build the shared state for one test app instance
pub fn mock_state() -> (web::Data<MockState>, web::Data<Arc<dyn IdentityResolver>>) {
    let users = Arc::new(MockUserRepository::new());
    let sessions = Arc::new(MockSessionRepository::new());
    let cache = Arc::new(MockTokenCache::new());
    let posts = Arc::new(MockPostRepository::new());
    let tokens = Arc::new(
        TokenService::new(JwtConfig::new("test-access-secret", "test-refresh-secret").into())
            .expect("token service"),
    );

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        sessions.clone(),
        cache,
        tokens,
    ));
    let user_service = Arc::new(UserService::new(users, sessions));
    let post_service = Arc::new(PostService::new(posts));

    let state = web::Data::new(AppState {
        auth_service: auth_service.clone(),
        user_service,
        post_service,
    });
    let resolver: Arc<dyn IdentityResolver> = auth_service;
    (state, web::Data::new(resolver))
}

/// Request body for a valid registration
pub fn sign_up_body(email: &str, device_id: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "Passw0rd!",
        "first_name": "Ann",
        "last_name": "Lee",
        "device_id": device_id,
    })
}
