//! Post repository module

mod mock;
mod r#trait;

pub use mock::MockPostRepository;
pub use r#trait::PostRepository;
