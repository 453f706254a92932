//! Web viewer UI - embedded HTML/CSS/JS for the comic reader
//!
//! Serves a dark-themed single-page app at `/` with:
//! - Most-read leaderboard on the landing view
//! - Catalog browser with cover grid and title search
//! - Reading view that renders every page of a comic

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the viewer UI
pub const VIEWER_HTML: &str = include_str!("viewer.html");

/// Serve the viewer HTML page
pub async fn serve_viewer() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(VIEWER_HTML))
        .into_response()
}
