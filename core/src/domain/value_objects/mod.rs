//! Value objects shared across services

pub mod auth_response;

pub use auth_response::{AuthResponse, AuthenticatedUser};
