use crate::web::error::AppError;
use crate::web::state::AppState;
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

/// Everything outside `/api`: `/` is `index.html`, `/about` is `about.html`
/// when that file exists, anything else is looked up under the site root.
pub async fn serve_site(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let path = request.uri().path().to_string();
    if path == "/api" || path.starts_with("/api/") {
        return AppError::NotFound.into_response();
    }

    let root = &state.site_root;
    if path == "/" {
        return serve_file(root.join("index.html"), request).await;
    }

    if let Some(candidate) = html_candidate(root, &path) {
        if tokio::fs::metadata(&candidate)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
        {
            return serve_file(candidate, request).await;
        }
    }

    ServeDir::new(root).oneshot(request).await.into_response()
}

async fn serve_file(path: PathBuf, request: Request) -> Response {
    ServeFile::new(path).oneshot(request).await.into_response()
}

/// `<root>/<path>.html` for an extensionless path without `..` segments.
fn html_candidate(root: &Path, path: &str) -> Option<PathBuf> {
    let relative = path.trim_matches('/');
    if relative.is_empty() || relative.split('/').any(|s| s == ".." || s == "." || s.is_empty()) {
        return None;
    }
    let base = relative.rsplit('/').next().unwrap_or(relative);
    if base.contains('.') {
        return None;
    }
    Some(root.join(format!("{}.html", relative)))
}
