use actix_web::{web, HttpResponse};
use validator::Validate;

use pl_core::repositories::{PostRepository, SessionRepository, TokenCache, UserRepository};
use pl_core::services::auth::SignUpData;

use crate::dto::auth_dto::SignUpRequest;
use crate::dto::validation_failed;
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/sign-up
///
/// Registers a new account and returns the token pair with the profile.
///
/// # Errors
/// - 400: invalid email, weak password, missing fields
/// - 409: email already registered
pub async fn sign_up<U, S, C, P>(
    state: web::Data<AppState<U, S, C, P>>,
    request: web::Json<SignUpRequest>,
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

    let request = request.into_inner();
    let data = SignUpData {
        email: request.email,
        password: request.password,
        first_name: request.first_name,
        last_name: request.last_name,
        age: request.age,
        city: request.city,
        device_id: request.device_id,
    };

    match state.auth_service.sign_up(data).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
