use actix_web::{web, HttpResponse};
use validator::Validate;

use pl_core::repositories::{PostRepository, SessionRepository, TokenCache, UserRepository};

use crate::dto::auth_dto::SignInRequest;
use crate::dto::validation_failed;
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/sign-in
///
/// Authenticates with email and password, rotates the device session and
/// returns a fresh token pair.
///
/// # Errors
/// - 400: malformed request
/// - 401: unknown email or wrong password (indistinguishable)
pub async fn sign_in<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    request: web::Json<SignInRequest>,
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
        .auth_service
        .sign_in(&request.email, &request.password, &request.device_id)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
