//! # Postline API
//!
//! HTTP layer for the Postline backend: actix-web routes, bearer-auth
//! middleware, request DTOs and the domain-error to HTTP mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
