//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::PageError;

/// Extract and validate a 1-based list page number from path
pub struct PageNumber(pub u32);

impl<S> FromRequestParts<S> for PageNumber
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| PageError::bad_request("missing page number"))?;

        match raw.parse::<u32>() {
            Ok(page) if page >= 1 => Ok(Self(page)),
            _ => Err(PageError::bad_request("page must be a positive number")),
        }
    }
}

/// Extract an article id and the slug the client used
pub struct ArticlePath {
    pub id: i64,
    pub slug: String,
}

impl<S> FromRequestParts<S> for ArticlePath
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((raw_id, slug)): Path<(String, String)> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| PageError::bad_request("malformed article path"))?;

        let id = raw_id
            .parse::<i64>()
            .map_err(|_| PageError::bad_request("article id must be a number"))?;

        Ok(Self { id, slug })
    }
}
