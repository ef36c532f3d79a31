use actix_web::{web, HttpResponse};

use pl_core::repositories::{PostRepository, SessionRepository, TokenCache, UserRepository};

use crate::dto::auth_dto::TokenPairResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::BearerToken;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Takes the refresh token as bearer, runs the refresh guard, and rotates
/// the session. The previous pair is invalid once this returns.
///
/// # Errors
/// - 401: missing header, invalid/expired token, or session already rotated
pub async fn refresh<U, S, C, P>(
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

    match state.auth_service.refresh(&identity).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
