//! HTTP API server for komikyo.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod blocking;
mod handlers;
mod query_types;
mod response_types;
mod viewer;

#[cfg(test)]
mod tests;

use axum::{routing::get, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use komikyo_catalog::Library;
use komikyo_storage::Storage;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Read-statistics store backing the leaderboard
    pub storage: Arc<Storage>,
    /// Catalog view over the comic library on disk
    pub library: Arc<Library>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/catalog", get(handlers::catalog::get_catalog))
        .route("/api/search", get(handlers::search::search_comics))
        .route("/api/comics/{category}/{title}", get(handlers::reader::get_comic))
        .route("/pages/{category}/{title}/{page}", get(handlers::reader::get_page))
        .route("/api/top", get(handlers::stats::get_top))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
