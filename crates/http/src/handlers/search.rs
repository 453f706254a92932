use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::query_types::SearchQuery;
use crate::response_types::SearchResponse;
use crate::AppState;

/// Case-insensitive substring search over title folder names.
///
/// An empty or missing `q` yields empty results, not an error.
pub async fn search_comics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let library = Arc::clone(&state.library);
    blocking_json(move || {
        let results = library.search(&query.q);
        Ok(SearchResponse { query: query.q, results })
    })
    .await
}
