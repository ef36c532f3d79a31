//! Application factory
//!
//! Builds the actix App with middleware, routes and shared state. Generic
//! over the repository implementations so tests can run the full HTTP
//! surface against the in-memory mocks.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use pl_core::repositories::{PostRepository, SessionRepository, TokenCache, UserRepository};

use crate::middleware::{cors::create_cors, BearerAuth, IdentityResolver};
use crate::routes::auth::{logout::logout, refresh::refresh, sign_in::sign_in, sign_up::sign_up};
use crate::routes::posts::{create_post, delete_post, get_post, list_posts, update_post};
use crate::routes::users::{delete_me, get_me, get_user, list_user_posts, list_users, update_me};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, S, C, P>(
    app_state: web::Data<AppState<U, S, C, P>>,
    resolver: web::Data<Arc<dyn IdentityResolver>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(resolver)
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/sign-up", web::post().to(sign_up::<U, S, C, P>))
                        .route("/sign-in", web::post().to(sign_in::<U, S, C, P>))
                        .route("/refresh", web::post().to(refresh::<U, S, C, P>))
                        .route("/logout", web::post().to(logout::<U, S, C, P>)),
                )
                .service(
                    web::scope("/users")
                        .route("", web::get().to(list_users::<U, S, C, P>).wrap(BearerAuth))
                        .route("/me", web::get().to(get_me::<U, S, C, P>).wrap(BearerAuth))
                        .route("/me", web::put().to(update_me::<U, S, C, P>).wrap(BearerAuth))
                        .route("/me", web::delete().to(delete_me::<U, S, C, P>).wrap(BearerAuth))
                        .route("/{id}/posts", web::get().to(list_user_posts::<U, S, C, P>))
                        .route("/{id}", web::get().to(get_user::<U, S, C, P>).wrap(BearerAuth)),
                )
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(list_posts::<U, S, C, P>))
                        .route("", web::post().to(create_post::<U, S, C, P>).wrap(BearerAuth))
                        .route("/{id}", web::get().to(get_post::<U, S, C, P>))
                        .route("/{id}", web::put().to(update_post::<U, S, C, P>).wrap(BearerAuth))
                        .route(
                            "/{id}",
                            web::delete().to(delete_post::<U, S, C, P>).wrap(BearerAuth),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "postline-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
