use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::response_types::ComicView;
use crate::AppState;

/// Reading view for one comic and the point where a read is counted.
///
/// The catalog check runs first so an unknown title gets a 404 without
/// minting a counter row. A failed `record_read` is logged and the view is
/// served anyway; statistics never take the reader down.
pub async fn get_comic(
    State(state): State<Arc<AppState>>,
    Path((category, title)): Path<(String, String)>,
) -> Result<Json<ComicView>, ApiError> {
    let library = Arc::clone(&state.library);
    let storage = Arc::clone(&state.storage);
    blocking_json(move || {
        if !library.contains(&category, &title) {
            return Err(ApiError::NotFound(format!("comic not found: {category}/{title}")));
        }
        let pages = library.pages(&category, &title);
        let info = library.info(&category, &title);
        if let Err(err) = storage.record_read(&category, &title) {
            tracing::warn!(%category, %title, error = %err, "failed to record read");
        }
        Ok(ComicView { category, title, info, pages })
    })
    .await
}

/// Serves one page image with a content type derived from its extension.
///
/// All path validation lives in `Library::page_path`; any rejection comes
/// back as 404.
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path((category, title, page)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    let library = Arc::clone(&state.library);
    let content_type = page_content_type(&page);
    let path = blocking_result(move || Ok(library.page_path(&category, &title, &page)?)).await?;
    let bytes = tokio::fs::read(&path).await.map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ApiError::NotFound("page not found".to_owned()),
        _ => ApiError::Internal(anyhow::anyhow!("failed to read page {}: {err}", path.display())),
    })?;
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

fn page_content_type(page: &str) -> &'static str {
    let ext = std::path::Path::new(page)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
