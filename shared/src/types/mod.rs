//! Shared type definitions

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination, SortOrder};
pub use response::ErrorResponse;
