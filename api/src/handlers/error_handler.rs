//! Maps domain errors onto HTTP status codes and the JSON error envelope.

use actix_web::HttpResponse;
use log::error;

use pl_core::errors::{AuthError, DomainError, TokenError};
use pl_shared::types::response::ErrorResponse;

/// Convert a domain error into an HTTP response
///
/// Credential failures, bad tokens and guard rejections all collapse into
/// the same 401 body; internal errors are logged with detail but answered
/// with a generic message.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::Unauthorized
        | DomainError::Auth(AuthError::AuthenticationFailed)
        | DomainError::Token(TokenError::InvalidToken) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("unauthorized", "Authentication failed")),
        DomainError::Forbidden { message } => {
            HttpResponse::Forbidden().json(ErrorResponse::new("forbidden", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("Resource not found: {}", resource),
        )),
        DomainError::Auth(AuthError::UserNotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", "User not found"))
        }
        DomainError::Conflict { message } => {
            HttpResponse::Conflict().json(ErrorResponse::new("conflict", message))
        }
        DomainError::Auth(AuthError::EmailTaken) => HttpResponse::Conflict()
            .json(ErrorResponse::new("conflict", "Email already registered")),
        DomainError::Internal { .. } | DomainError::Token(TokenError::TokenGenerationFailed) => {
            error!("Internal error: {}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                DomainError::Validation {
                    message: "bad".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                DomainError::Auth(AuthError::AuthenticationFailed),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Token(TokenError::InvalidToken),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Forbidden {
                    message: "no".into(),
                },
                StatusCode::FORBIDDEN,
            ),
            (DomainError::not_found("post"), StatusCode::NOT_FOUND),
            (
                DomainError::Auth(AuthError::EmailTaken),
                StatusCode::CONFLICT,
            ),
            (
                DomainError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(handle_domain_error(&err).status(), status, "{}", err);
        }
    }

    #[test]
    fn test_credential_and_token_failures_share_a_body() {
        // Probing resistance: the three 401 causes must be indistinguishable
        let a = handle_domain_error(&DomainError::Unauthorized);
        let b = handle_domain_error(&DomainError::Auth(AuthError::AuthenticationFailed));
        assert_eq!(a.status(), b.status());
    }
}
