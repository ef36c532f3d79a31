use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

use pl_api::app::create_app;
use pl_api::middleware::IdentityResolver;
use pl_api::routes::AppState;
use pl_core::services::auth::AuthService;
use pl_core::services::post::PostService;
use pl_core::services::token::TokenService;
use pl_core::services::user::UserService;
use pl_infra::cache::{RedisClient, RedisTokenCache};
use pl_infra::database::mysql::{MySqlPostRepository, MySqlSessionRepository, MySqlUserRepository};
use pl_infra::database::DatabasePool;
use pl_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Postline API server");

    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT secrets are using default placeholders; set JWT_ACCESS_SECRET and JWT_REFRESH_SECRET");
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to {}", bind_address);

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(into_io_error)?;
    let redis = RedisClient::new(&config.cache).await.map_err(into_io_error)?;

    let token_service = Arc::new(
        TokenService::new(config.auth.jwt.clone().into())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?,
    );

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let session_repository = Arc::new(MySqlSessionRepository::new(pool.get_pool().clone()));
    let post_repository = Arc::new(MySqlPostRepository::new(pool.get_pool().clone()));
    let token_cache = Arc::new(RedisTokenCache::new(
        redis,
        config.cache.key_prefix.clone(),
        token_service.access_expiry() as usize,
    ));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        session_repository.clone(),
        token_cache,
        token_service,
    ));
    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        session_repository.clone(),
    ));
    let post_service = Arc::new(PostService::new(post_repository.clone()));

    let app_state = web::Data::new(AppState {
        auth_service: auth_service.clone(),
        user_service,
        post_service,
    });
    let resolver: Arc<dyn IdentityResolver> = auth_service;
    let resolver = web::Data::new(resolver);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || create_app(app_state.clone(), resolver.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}

fn into_io_error(e: pl_infra::InfrastructureError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}
