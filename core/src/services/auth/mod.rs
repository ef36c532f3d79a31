//! Authentication and session lifecycle

mod password;
mod service;

pub use password::{hash_password, verify_password};
pub use service::{AuthService, SignUpData};
