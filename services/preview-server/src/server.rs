//! HTTP routing and static file handling.
//!
//! Each request maps a URL path to one file read under the root directory.
//! Requests share no mutable state; a missing file is answered with a 404
//! and the process keeps serving.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use once_cell::sync::Lazy;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Fixed extension -> MIME table. Anything else is served as
/// `application/octet-stream`.
static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("html", "text/html"),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("css", "text/css"),
        ("js", "text/javascript"),
    ])
});

const DEFAULT_MIME: &str = "application/octet-stream";

/// Document served for `GET /`.
const PREVIEW_PAGE: &str = "preview.html";

/// Shared server configuration.
pub struct ServerState {
    pub root: PathBuf,
}

/// Build the router serving files under `root`.
pub fn router(root: PathBuf) -> Router {
    let state = Arc::new(ServerState { root });
    Router::new()
        .fallback(serve_file)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

async fn serve_file(Extension(state): Extension<Arc<ServerState>>, uri: Uri) -> Response {
    let Some(path) = resolve(&state.root, uri.path()) else {
        return not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(data) => {
            let mime = content_type(&path);
            debug!(path = %path.display(), mime, bytes = data.len(), "Serving file");
            ([(header::CONTENT_TYPE, mime)], data).into_response()
        }
        Err(_) => not_found(),
    }
}

/// Map a request path to a file under the root, rejecting traversal.
fn resolve(root: &Path, uri_path: &str) -> Option<PathBuf> {
    let rel = if uri_path == "/" {
        PREVIEW_PAGE
    } else {
        uri_path.trim_start_matches('/')
    };
    let rel = Path::new(rel);
    if rel
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir))
    {
        return None;
    }
    Some(root.join(rel))
}

/// Look up the Content-Type for a file path.
fn content_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| MIME_TYPES.get(ext).copied())
        .unwrap_or(DEFAULT_MIME)
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
