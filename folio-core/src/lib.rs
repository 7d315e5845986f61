//! folio-core: article models, text helpers and the search clear widget
//!
//! Everything here is free of I/O so the renderer and its tests can share
//! it. `folio-server` builds the HTTP service on top.

pub mod article;
pub mod error;
pub mod text;
pub mod widget;

pub use article::{
    article_path, path_slug, ArticleDetail, ArticleEnvelope, ArticlePage, ArticleSummary,
    ListedArticle, FALLBACK_SLUG, PAGE_SIZE,
};
pub use error::{FolioError, Result};
pub use text::{create_slug, escape_html, extract_first_author};
pub use widget::{ClearButton, InputField, SearchClearWidget, SearchForm, Visibility};
