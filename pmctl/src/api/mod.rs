//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all entity endpoints
//! - **[`models`]**: Request/response data structures
//! - **[`identity`]**: The identity contract shared by every mutating
//!   endpoint
//!
//! All endpoints are documented with OpenAPI annotations via `utoipa`;
//! the rendered documentation is served at `/docs`.

pub mod handlers;
pub mod identity;
pub mod models;
