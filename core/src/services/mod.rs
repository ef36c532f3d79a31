//! Business services

pub mod auth;
pub mod post;
pub mod token;
pub mod user;
