use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::response_types::{CatalogResponse, CategoryListing};
use crate::AppState;

/// Full catalog: every category with its readable comics.
///
/// Titles without any page image are left out, matching the cover grid the
/// viewer renders.
pub async fn get_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogResponse>, ApiError> {
    let library = Arc::clone(&state.library);
    blocking_json(move || {
        let categories = library
            .scan()
            .into_keys()
            .map(|name| {
                let comics = library.summaries(&name);
                CategoryListing { name, comics }
            })
            .collect();
        Ok(CatalogResponse { categories })
    })
    .await
}
