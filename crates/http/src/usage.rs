//! Usage page - static HTML describing the API, served at `/`.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the usage page
pub const USAGE_HTML: &str = include_str!("usage.html");

/// Serve the usage HTML page
pub async fn serve_usage() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(USAGE_HTML))
        .into_response()
}
