//! Page error type with IntoResponse
//!
//! Errors render the HTML error page with the matching status code.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::render::error_page;

/// Message shown when the article list cannot be loaded.
pub const LIST_UNAVAILABLE: &str = "Could not load article data.";

/// Message shown when a single article cannot be loaded.
pub const ARTICLE_NOT_FOUND: &str = "Article not found or API call failed";

/// Message shown for paths no route matches.
pub const PAGE_NOT_FOUND: &str = "Page not found";

/// Page error with automatic HTTP status mapping
#[derive(Debug)]
pub enum PageError {
    /// Malformed path or query (400)
    BadRequest { message: String },

    /// Article missing or its fetch failed (404)
    NotFound { message: String },

    /// Upstream data unavailable (500, logged)
    Unavailable { message: String },
}

impl PageError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::NotFound { message }
            | Self::Unavailable { message } => message,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self.message());
        }

        (status, Html(error_page(self.message()))).into_response()
    }
}
