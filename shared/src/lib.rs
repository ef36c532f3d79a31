//! # Postline Shared
//!
//! Cross-cutting types shared by every layer of the Postline backend:
//! configuration, pagination, the API error envelope and validation helpers.

pub mod config;
pub mod types;
pub mod utils;
