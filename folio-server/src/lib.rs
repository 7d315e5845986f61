//! folio-server: HTML renderer for the upstream article API
//!
//! Serves the article list (with search), article detail pages and the
//! browser script for the search clear widget.

pub mod http;
pub mod render;
pub mod upstream;

pub use http::{build_router, run_server, AppState, PageError, ServerConfig, ServerError};
pub use upstream::{ApiClient, ArticleSource, UpstreamConfig, UpstreamError};
