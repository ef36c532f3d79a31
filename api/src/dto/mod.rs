//! Request/response DTOs with validation rules

pub mod auth_dto;
pub mod post_dto;
pub mod user_dto;

use actix_web::HttpResponse;
use validator::ValidationErrors;

use pl_shared::types::response::ErrorResponse;

/// 400 response summarizing which fields failed validation
pub fn validation_failed(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors.field_errors().keys().map(|f| f.to_string()).collect();
    fields.sort();

    HttpResponse::BadRequest().json(ErrorResponse::new(
        "validation_error",
        format!("Invalid fields: {}", fields.join(", ")),
    ))
}
