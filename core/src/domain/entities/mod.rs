//! Domain entities

pub mod post;
pub mod session;
pub mod token;
pub mod user;

pub use post::{Post, PostCategory};
pub use session::Session;
pub use token::{Claims, TokenPair, TokenType};
pub use user::User;
