//! Client for the upstream article API
//!
//! Every request carries the renderer key in `X-Renderer-Key`. Failures are
//! logged here and returned as `UpstreamError`; handlers decide which page
//! to show.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::{ArticleDetail, ArticleEnvelope, ArticlePage, FolioError};
use reqwest::{Client, Response};
use tracing::{debug, warn};

/// Header carrying the renderer key.
pub const RENDERER_KEY_HEADER: &str = "X-Renderer-Key";

/// Upper bound on upstream error bodies copied into logs.
const MAX_ERROR_BODY: usize = 500;

/// Upstream error type
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Decode(#[from] FolioError),
}

/// Where article data comes from.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// One list page, optionally filtered by a search term.
    async fn fetch_articles(
        &self,
        page: u32,
        search: Option<&str>,
    ) -> Result<ArticlePage, UpstreamError>;

    /// A single article, `None` when the API has no article under `id`.
    async fn fetch_article(&self, id: i64) -> Result<Option<ArticleDetail>, UpstreamError>;
}

/// Connection settings for the article API
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `https://api.example.com/articles`
    pub base_url: String,
    /// Renderer key sent with every request
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Validate and normalize settings. Both URL and key must be non-empty.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FolioError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let api_key = api_key.into().trim().to_string();

        if base_url.is_empty() {
            return Err(FolioError::config("API_BASE_URL environment variable not set"));
        }
        if api_key.is_empty() {
            return Err(FolioError::config("API_KEY environment variable not set"));
        }

        Ok(Self {
            base_url,
            api_key,
            timeout,
        })
    }
}

/// reqwest-backed `ArticleSource`
pub struct ApiClient {
    client: Client,
    config: UpstreamConfig,
}

impl ApiClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.config.base_url, name)
    }

    async fn get(&self, name: &str, query: &[(&str, String)]) -> Result<Vec<u8>, UpstreamError> {
        let url = self.endpoint(name);
        debug!(%url, ?query, "calling upstream");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(RENDERER_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .inspect_err(|e| warn!(%url, error = %e, "upstream request failed"))?;

        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn check_status(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body: String = text.chars().take(MAX_ERROR_BODY).collect();
    warn!(status = status.as_u16(), body = %body, "upstream returned error status");

    Err(UpstreamError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ArticleSource for ApiClient {
    async fn fetch_articles(
        &self,
        page: u32,
        search: Option<&str>,
    ) -> Result<ArticlePage, UpstreamError> {
        let mut query = vec![("page", page.to_string())];
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            query.push(("search", term.to_string()));
        }

        let body = self.get("GetArticles", &query).await?;
        Ok(ArticlePage::from_slice(&body)?)
    }

    async fn fetch_article(&self, id: i64) -> Result<Option<ArticleDetail>, UpstreamError> {
        let body = self.get("GetArticleByID", &[("id", id.to_string())]).await?;
        Ok(ArticleEnvelope::from_slice(&body)?.article)
    }
}

/// In-memory source for handler tests.
#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct FakeSource {
        pub page: Option<ArticlePage>,
        pub article: Option<ArticleDetail>,
        pub calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ArticleSource for FakeSource {
        async fn fetch_articles(
            &self,
            page: u32,
            search: Option<&str>,
        ) -> Result<ArticlePage, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("articles page={page} search={search:?}"));
            self.page.clone().ok_or(UpstreamError::Status {
                status: 503,
                body: "unavailable".into(),
            })
        }

        async fn fetch_article(&self, id: i64) -> Result<Option<ArticleDetail>, UpstreamError> {
            self.calls.lock().unwrap().push(format!("article id={id}"));
            Ok(self.article.clone().filter(|a| a.id == id))
        }
    }
}
