//! Post route handlers
//!
//! Reads are public; create/update/delete run behind the access-token
//! middleware and enforce authorship in the service layer.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use pl_core::repositories::{PostRepository, SessionRepository, TokenCache, UserRepository};

use crate::dto::post_dto::{CreatePostRequest, PostListQuery, UpdatePostRequest};
use crate::dto::validation_failed;
use crate::handlers::handle_domain_error;
use crate::middleware::CurrentUser;
use crate::routes::AppState;

/// Handler for GET /api/v1/posts (public)
pub async fn list_posts<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    query: web::Query<PostListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    let pagination = query.pagination();
    match state.post_service.list(None, query.order, pagination).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/v1/posts
///
/// Creates a post owned by the authenticated user.
///
/// # Errors
/// - 400: bad title/content length or unknown category
/// - 401: missing or revoked access token
pub async fn create_post<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    user: CurrentUser,
    request: web::Json<CreatePostRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }
    let category = match request.category() {
        Ok(category) => category,
        Err(error) => return handle_domain_error(&error),
    };

    let request = request.into_inner();
    match state
        .post_service
        .create(user.0.user_id, request.title, request.content, category)
        .await
    {
        Ok(post) => HttpResponse::Created().json(post),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/posts/{id} (public)
pub async fn get_post<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    match state.post_service.get_by_id(path.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/posts/{id}
///
/// # Errors
/// - 403: the caller is not the author
/// - 404: the post does not exist
pub async fn update_post<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    user: CurrentUser,
    path: web::Path<Uuid>,
    request: web::Json<UpdatePostRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }
    let update = match request.into_inner().into_update() {
        Ok(update) => update,
        Err(error) => return handle_domain_error(&error),
    };

    match state
        .post_service
        .update(user.0.user_id, path.into_inner(), update)
        .await
    {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /api/v1/posts/{id}
pub async fn delete_post<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    match state
        .post_service
        .delete(user.0.user_id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
