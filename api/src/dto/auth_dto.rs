//! Authentication request/response DTOs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use pl_shared::utils::validation::is_valid_password;

/// Request body for POST /api/v1/auth/sign-up
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email)]
    pub email: String,
    #[validate(custom = "validate_password")]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i32>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub device_id: String,
}

/// Request body for POST /api/v1/auth/sign-in
///
/// The password is not checked against the policy here; whatever was
/// submitted is compared against the stored hash.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 128))]
    pub device_id: String,
}

/// Response body for POST /api/v1/auth/refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if is_valid_password(password) {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_policy");
        err.message =
            Some("Password must be 8-128 characters with at least one letter and one digit".into());
        Err(err)
    }
}
