#![expect(clippy::unwrap_used, reason = "test code")]

use std::fs;
use std::path::Path as FsPath;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use tempfile::TempDir;

use komikyo_catalog::Library;
use komikyo_storage::Storage;

use crate::api_error::ApiError;
use crate::handlers::{catalog, reader, search, stats};
use crate::query_types::{SearchQuery, TopQuery};
use crate::AppState;

fn write_page(dir: &FsPath, name: &str) {
    fs::write(dir.join(name), b"image-bytes").unwrap();
}

/// Storage plus a small two-category library, both inside one temp dir.
fn test_state() -> (Arc<AppState>, TempDir) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("library");

    let dune = root.join("Action").join("Dune");
    fs::create_dir_all(&dune).unwrap();
    write_page(&dune, "01.jpg");
    write_page(&dune, "02.jpg");
    fs::write(dune.join("info.json"), r#"{"title": "Dune", "year": 1984}"#).unwrap();

    let akira = root.join("Drama").join("Akira");
    fs::create_dir_all(&akira).unwrap();
    write_page(&akira, "cover.png");

    let storage = Storage::new(&tmp.path().join("stats.db")).unwrap();
    let state = Arc::new(AppState {
        storage: Arc::new(storage),
        library: Arc::new(Library::new(root)),
    });
    (state, tmp)
}

#[tokio::test]
async fn catalog_lists_categories_with_comics() {
    let (state, _tmp) = test_state();
    let response = catalog::get_catalog(State(state)).await.unwrap();

    let categories = &response.0.categories;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Action");
    assert_eq!(categories[0].comics.len(), 1);
    assert_eq!(categories[0].comics[0].title, "Dune");
    assert_eq!(categories[0].comics[0].cover, "01.jpg");
}

#[tokio::test]
async fn search_finds_titles_across_categories() {
    let (state, _tmp) = test_state();
    let query = Query(SearchQuery { q: "akira".to_owned() });
    let response = search::search_comics(State(state), query).await.unwrap();

    assert_eq!(response.0.query, "akira");
    assert_eq!(response.0.results.len(), 1);
    assert_eq!(response.0.results[0].category, "Drama");
}

#[tokio::test]
async fn search_with_empty_query_is_empty_not_error() {
    let (state, _tmp) = test_state();
    let query = Query(SearchQuery { q: String::new() });
    let response = search::search_comics(State(state), query).await.unwrap();
    assert!(response.0.results.is_empty());
}

#[tokio::test]
async fn reading_view_records_exactly_one_read() {
    let (state, _tmp) = test_state();
    let path = Path(("Action".to_owned(), "Dune".to_owned()));
    let response = reader::get_comic(State(Arc::clone(&state)), path).await.unwrap();

    assert_eq!(response.0.pages, ["01.jpg", "02.jpg"]);
    assert_eq!(response.0.info.as_ref().unwrap().title.as_deref(), Some("Dune"));

    let counters = state.storage.counters().unwrap();
    assert_eq!(counters.len(), 1);
    assert_eq!(counters[0].views, 1);

    let path = Path(("Action".to_owned(), "Dune".to_owned()));
    reader::get_comic(State(Arc::clone(&state)), path).await.unwrap();
    let counters = state.storage.counters().unwrap();
    assert_eq!(counters[0].views, 2);
}

#[tokio::test]
async fn unknown_title_is_404_and_records_nothing() {
    let (state, _tmp) = test_state();
    let path = Path(("Action".to_owned(), "Nope".to_owned()));
    let err = reader::get_comic(State(Arc::clone(&state)), path).await.unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
    assert!(state.storage.counters().unwrap().is_empty());
}

#[tokio::test]
async fn top_reflects_recorded_reads() {
    let (state, _tmp) = test_state();
    for _ in 0..3 {
        state.storage.record_read("Action", "Dune").unwrap();
    }
    state.storage.record_read("Drama", "Akira").unwrap();

    let query = Query(TopQuery { limit: 10 });
    let response = stats::get_top(State(state), query).await.unwrap();

    assert_eq!(response.0.len(), 2);
    assert_eq!(response.0[0].title, "Dune");
    assert_eq!(response.0[0].views, 3);
}

#[tokio::test]
async fn top_on_empty_store_is_empty() {
    let (state, _tmp) = test_state();
    let query = Query(TopQuery { limit: 10 });
    let response = stats::get_top(State(state), query).await.unwrap();
    assert!(response.0.is_empty());
}

#[tokio::test]
async fn page_endpoint_serves_image_with_content_type() {
    let (state, _tmp) = test_state();
    let path = Path(("Action".to_owned(), "Dune".to_owned(), "01.jpg".to_owned()));
    let response = reader::get_page(State(state), path).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "image/jpeg");
}

#[tokio::test]
async fn page_endpoint_rejects_traversal() {
    let (state, _tmp) = test_state();
    let path = Path(("..".to_owned(), "Dune".to_owned(), "01.jpg".to_owned()));
    let err = reader::get_page(State(Arc::clone(&state)), path).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let path = Path(("Action".to_owned(), "Dune".to_owned(), "info.json".to_owned()));
    let err = reader::get_page(State(state), path).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn missing_page_is_404() {
    let (state, _tmp) = test_state();
    let path = Path(("Action".to_owned(), "Dune".to_owned(), "99.jpg".to_owned()));
    let err = reader::get_page(State(state), path).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
