//! Axum server setup
//!
//! Server skeleton with:
//! - Article pages, health, embedded widget script
//! - Static files under `/assets`
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use axum::http::Uri;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::error::{PageError, PAGE_NOT_FOUND};
use super::routes;
use crate::upstream::ArticleSource;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub source: Arc<dyn ArticleSource>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self {
            source,
            started_at: Instant::now(),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::articles::router())
        .merge(routes::assets::router())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unmatched paths get the HTML 404 page.
async fn not_found(uri: Uri) -> PageError {
    tracing::debug!(%uri, "no route");
    PageError::NotFound {
        message: PAGE_NOT_FOUND.to_string(),
    }
}

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run_server(
    source: Arc<dyn ArticleSource>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    if !config.assets_dir.is_dir() {
        tracing::warn!(
            assets_dir = %config.assets_dir.display(),
            "assets directory not found, /assets will return 404"
        );
    }

    let state = Arc::new(AppState::new(source));
    let app = build_router(state, &config.assets_dir);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
