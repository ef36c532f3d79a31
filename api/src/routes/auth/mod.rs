//! Authentication route handlers
//!
//! - POST /api/v1/auth/sign-up: register and open a device session
//! - POST /api/v1/auth/sign-in: authenticate and rotate the device session
//! - POST /api/v1/auth/refresh: rotate with a bearer refresh token
//! - POST /api/v1/auth/logout: close the device session

pub mod logout;
pub mod refresh;
pub mod sign_in;
pub mod sign_up;
