//! Helpers for running blocking operations in async handlers.
//!
//! Storage and catalog calls are synchronous (rusqlite, `std::fs`), so every
//! handler funnels them through `spawn_blocking` instead of stalling the
//! runtime. These helpers eliminate the boilerplate of spawning, handling
//! join errors, and wrapping the result in `Json`.

use axum::Json;
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking closure and returns `Result<Json<T>, ApiError>`.
///
/// Use this for handlers that return JSON-wrapped results.
pub(crate) async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Serialize + Send + 'static,
{
    blocking_result(f).await.map(Json)
}

/// Runs a blocking closure and returns the raw value for further processing.
pub(crate) async fn blocking_result<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Internal(anyhow::anyhow!("blocking task failed: {err}")))?
}
