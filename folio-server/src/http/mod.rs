//! HTTP layer
//!
//! Axum server with:
//! - HTML article pages rendered from the upstream API
//! - HTML error pages with status mapping
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::PageError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
