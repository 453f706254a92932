use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use komikyo_core::TopComic;

use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::query_types::TopQuery;
use crate::AppState;

/// Most-read leaderboard, capped and ordered by the store.
pub async fn get_top(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopQuery>,
) -> Result<Json<Vec<TopComic>>, ApiError> {
    let storage = Arc::clone(&state.storage);
    let limit = query.capped_limit();
    blocking_json(move || Ok(storage.top_comics(limit)?)).await
}
