//! Post authoring and listing

mod service;

pub use service::{PostService, PostUpdate};
