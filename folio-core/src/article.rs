//! Article payloads exchanged with the upstream article API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FolioError, Result};
use crate::text::{create_slug, extract_first_author};

/// Number of articles per list page served by the upstream API.
pub const PAGE_SIZE: u32 = 50;

/// Path segment used when a title has nothing to slug (blank or symbols only).
pub const FALLBACK_SLUG: &str = "article";

/// Slug for a detail URL; never empty.
pub fn path_slug(title: &str) -> String {
    let slug = create_slug(title);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// One entry of a list page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Fields the renderer does not use, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A list page as returned by `GetArticles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    #[serde(default)]
    pub data: Vec<ArticleSummary>,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default = "first_page")]
    pub current_page: u32,
}

fn first_page() -> u32 {
    1
}

impl ArticlePage {
    /// Decode a `GetArticles` response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| FolioError::json("article page", e))
    }
}

/// Full article as returned by `GetArticleByID`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArticleDetail {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope around a single article; the upstream wraps it in `D`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleEnvelope {
    #[serde(rename = "D")]
    pub article: Option<ArticleDetail>,
}

impl ArticleEnvelope {
    /// Decode a `GetArticleByID` response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| FolioError::json("article envelope", e))
    }
}

/// A list entry prepared for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ListedArticle {
    #[serde(flatten)]
    pub article: ArticleSummary,
    pub slug: String,
    pub short_author_name: String,
}

impl From<ArticleSummary> for ListedArticle {
    fn from(article: ArticleSummary) -> Self {
        Self {
            slug: path_slug(&article.title),
            short_author_name: extract_first_author(&article.author),
            article,
        }
    }
}

impl ArticleDetail {
    /// Slug the detail URL should carry for this article.
    pub fn canonical_slug(&self) -> String {
        path_slug(&self.title)
    }

    pub fn short_author(&self) -> String {
        extract_first_author(&self.authors)
    }
}

/// Path of an article's detail page.
pub fn article_path(id: i64, slug: &str) -> String {
    format!("/article/{id}/{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_decodes_and_keeps_extra_fields() {
        let page: ArticlePage = serde_json::from_value(json!({
            "data": [
                {"id": 7, "title": "Hello World", "author": "Ada, Bob", "tags": ["x"]}
            ],
            "totalPages": 3,
            "currentPage": 2
        }))
        .unwrap();

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.data[0].extra["tags"], json!(["x"]));
    }

    #[test]
    fn listed_article_is_enriched() {
        let summary: ArticleSummary = serde_json::from_value(json!({
            "id": 1,
            "title": "The C# API & Python Renderer!",
            "author": "Jane Doe, John Roe"
        }))
        .unwrap();

        let listed = ListedArticle::from(summary);
        assert_eq!(listed.slug, "the-c-api-python-renderer");
        assert_eq!(listed.short_author_name, "Jane Doe");
    }

    #[test]
    fn envelope_decodes_pascal_case() {
        let env: ArticleEnvelope = serde_json::from_value(json!({
            "D": {"Id": 42, "Title": "Deep Dive", "Authors": "Kim, Lee", "Body": "<p>hi</p>"}
        }))
        .unwrap();

        let article = env.article.unwrap();
        assert_eq!(article.canonical_slug(), "deep-dive");
        assert_eq!(article.short_author(), "Kim");
        assert_eq!(article_path(article.id, "deep-dive"), "/article/42/deep-dive");
    }

    #[test]
    fn malformed_body_reports_context() {
        let err = ArticlePage::from_slice(b"{not json").unwrap_err();
        assert!(err.to_string().contains("article page"));
    }

    #[test]
    fn blank_titles_fall_back_to_placeholder_slug() {
        let summary: ArticleSummary =
            serde_json::from_value(json!({"id": 3, "title": "!!!", "author": ""})).unwrap();
        let listed = ListedArticle::from(summary);
        assert_eq!(listed.slug, FALLBACK_SLUG);
        assert_eq!(article_path(3, &listed.slug), "/article/3/article");

        let env: ArticleEnvelope =
            serde_json::from_value(json!({"D": {"Id": 3, "Title": ""}})).unwrap();
        assert_eq!(env.article.unwrap().canonical_slug(), FALLBACK_SLUG);
    }

    #[test]
    fn non_latin_titles_get_transliterated_slugs() {
        let summary: ArticleSummary =
            serde_json::from_value(json!({"id": 5, "title": "Привет мир", "author": "Иван"}))
                .unwrap();
        assert_eq!(ListedArticle::from(summary).slug, "privet-mir");
    }

    #[test]
    fn envelope_without_article() {
        let env: ArticleEnvelope = serde_json::from_value(json!({ "D": null })).unwrap();
        assert!(env.article.is_none());
    }
}
