//! Access-token cache port

mod mock;
mod r#trait;

pub use mock::MockTokenCache;
pub use r#trait::TokenCache;
