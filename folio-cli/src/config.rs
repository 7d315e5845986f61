//! Environment loading for the folio binary

use std::path::PathBuf;

/// Load variables from `./.env` without overriding the process environment.
///
/// Runs before tracing is set up so `RUST_LOG` may come from the file; the
/// caller logs the returned path once logging is available.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Log where configuration came from.
pub fn report_dotenv(loaded: Option<&PathBuf>) {
    match loaded {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::debug!("No .env file found, using environment variables only"),
    }
}
