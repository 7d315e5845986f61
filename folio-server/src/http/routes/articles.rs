//! Article list and detail pages

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use folio_core::{article_path, ListedArticle, PAGE_SIZE};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::http::error::{PageError, ARTICLE_NOT_FOUND, LIST_UNAVAILABLE};
use crate::http::extractors::{ArticlePath, PageNumber};
use crate::http::server::AppState;
use crate::render::{self, ListView};

/// Query parameters of the list pages
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    /// Search term, `None` when absent or blank.
    fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// GET / - first list page
async fn list_first_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, PageError> {
    list_articles(&state, 1, params.term()).await
}

/// GET /GetArticles/{page} - list page by number
async fn list_page(
    State(state): State<Arc<AppState>>,
    PageNumber(page): PageNumber,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, PageError> {
    list_articles(&state, page, params.term()).await
}

async fn list_articles(
    state: &AppState,
    page: u32,
    search: Option<&str>,
) -> Result<Html<String>, PageError> {
    let data = state
        .source
        .fetch_articles(page, search)
        .await
        .map_err(|e| {
            warn!(page, error = %e, "failed to load article list");
            PageError::Unavailable {
                message: LIST_UNAVAILABLE.to_string(),
            }
        })?;

    // An empty unfiltered list means the API has nothing to serve. An empty
    // search result still renders, so the search box stays usable.
    if data.data.is_empty() && search.is_none() {
        return Err(PageError::Unavailable {
            message: LIST_UNAVAILABLE.to_string(),
        });
    }

    debug!(page, count = data.data.len(), ?search, "rendering article list");

    let view = ListView {
        articles: data.data.into_iter().map(ListedArticle::from).collect(),
        current_page: data.current_page,
        total_pages: data.total_pages,
        page_size: PAGE_SIZE,
        search_term: search.map(String::from),
    };

    Ok(Html(render::list_page(&view)))
}

/// GET /article/{id}/{slug} - single article
async fn article_detail(
    State(state): State<Arc<AppState>>,
    ArticlePath { id, slug }: ArticlePath,
) -> Result<Response, PageError> {
    let article = match state.source.fetch_article(id).await {
        Ok(Some(article)) => article,
        Ok(None) => {
            info!(id, "article not found");
            return Err(PageError::NotFound {
                message: ARTICLE_NOT_FOUND.to_string(),
            });
        }
        Err(e) => {
            warn!(id, error = %e, "failed to load article");
            return Err(PageError::NotFound {
                message: ARTICLE_NOT_FOUND.to_string(),
            });
        }
    };

    let expected = article.canonical_slug();
    if slug != expected {
        debug!(id, %slug, %expected, "redirecting to canonical slug");
        return Ok(Redirect::permanent(&article_path(id, &expected)).into_response());
    }

    let short_author = article.short_author();
    Ok(Html(render::detail_page(&article, &short_author)).into_response())
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_first_page))
        .route("/GetArticles/{page}", get(list_page))
        .route("/article/{id}/{slug}", get(article_detail))
}
