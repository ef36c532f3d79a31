use actix_web::{web, HttpResponse};

use pl_core::repositories::{PostRepository, SessionRepository, TokenCache, UserRepository};

use crate::handlers::handle_domain_error;
use crate::middleware::BearerToken;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Takes the refresh token as bearer and closes the device session,
/// revoking both the refresh row and the cached access token.
///
/// # Errors
/// - 401: missing header or invalid refresh token
pub async fn logout<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    C: TokenCache + 'static,
    P: PostRepository + 'static,
{
    let identity = match state.auth_service.resolve_refresh_token(&token.0).await {
        Ok(identity) => identity,
        Err(error) => return handle_domain_error(&error),
    };

    match state.auth_service.logout(&identity).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
