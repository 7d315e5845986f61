//! Embedded widget script

use std::sync::Arc;

use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::http::server::AppState;
use crate::render::SEARCH_CLEAR_SCRIPT_PATH;

/// Browser side of the search clear widget.
pub const SEARCH_CLEAR_JS: &str = include_str!("../../../assets/search-clear.js");

/// GET /static/search-clear.js
async fn search_clear_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        SEARCH_CLEAR_JS,
    )
}

/// Static routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(SEARCH_CLEAR_SCRIPT_PATH, get(search_clear_script))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_binds_widget_elements() {
        for id in ["search-input", "search-clear", "search-form"] {
            assert!(SEARCH_CLEAR_JS.contains(id), "script does not reference {id}");
        }
        assert!(SEARCH_CLEAR_JS.contains("addEventListener(\"input\""));
    }
}
