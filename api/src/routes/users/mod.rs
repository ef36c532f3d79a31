//! User route handlers
//!
//! All routes here run behind the access-token middleware except the
//! author posts listing, which is public.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use pl_core::repositories::{PostRepository, SessionRepository, TokenCache, UserRepository};

use crate::dto::post_dto::PostListQuery;
use crate::dto::user_dto::{UpdateProfileRequest, UserListQuery};
use crate::dto::validation_failed;
use crate::handlers::handle_domain_error;
use crate::middleware::CurrentUser;
use crate::routes::AppState;

/// Handler for GET /api/v1/users
///
/// Paginated listing with optional filters: `search` (id or email),
/// `first_name`, `last_name`, `city`, `order`, `page`, `per_page`.
pub async fn list_users<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    query: web::Query<UserListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    let (filter, pagination) = query.into_inner().into_parts();
    match state.user_service.list(filter, pagination).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/users/me
pub async fn get_me<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    user: CurrentUser,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    match state.user_service.get_by_id(user.0.user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/users/me
///
/// Partial profile update; omitted fields are left untouched.
pub async fn update_me<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    user: CurrentUser,
    request: web::Json<UpdateProfileRequest>,
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

    match state
        .user_service
        .update_profile(user.0.user_id, request.into_inner().into())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /api/v1/users/me
///
/// Removes the account; sessions are purged and posts cascade.
pub async fn delete_me<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    user: CurrentUser,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    match state.user_service.remove_account(user.0.user_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/users/{id}
pub async fn get_user<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    match state.user_service.get_by_id(path.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/users/{id}/posts (public)
pub async fn list_user_posts<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    path: web::Path<Uuid>,
    query: web::Query<PostListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    let pagination = query.pagination();
    match state
        .post_service
        .list(Some(path.into_inner()), query.order, pagination)
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(&error),
    }
}
