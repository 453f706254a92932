//! Response types (Serialize)

use serde::Serialize;

use komikyo_core::{ComicInfo, ComicSummary};

/// One category with its comics, as listed on the catalog view.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub name: String,
    pub comics: Vec<ComicSummary>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<CategoryListing>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ComicSummary>,
}

/// Reading-view payload. Serving this is what counts as one read event.
#[derive(Debug, Serialize)]
pub struct ComicView {
    pub category: String,
    pub title: String,
    pub info: Option<ComicInfo>,
    pub pages: Vec<String>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
