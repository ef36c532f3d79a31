//! Repository interfaces (ports) and in-memory mocks for testing

pub mod post;
pub mod session;
pub mod token_cache;
pub mod user;

pub use post::PostRepository;
pub use session::SessionRepository;
pub use token_cache::TokenCache;
pub use user::{UserListFilter, UserRepository};
