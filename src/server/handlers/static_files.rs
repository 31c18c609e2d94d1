use std::convert::Infallible;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use log::debug;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::utils::path::join_within;

/// URL prefix for project files
const PROJECTS_PREFIX: &str = "/projects";

/// Find a static asset for a decoded request path
///
/// Only regular files count; directories have no index page.
pub fn find_asset(public_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let candidate = join_within(public_dir, request_path)?;
    if candidate.is_file() {
        Some(candidate)
    } else {
        None
    }
}

/// Find a file under the projects directory for a `/projects/...` request path
pub fn find_project_asset(projects_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let rest = request_path.strip_prefix(PROJECTS_PREFIX)?;
    if !rest.starts_with('/') {
        return None;
    }
    find_asset(projects_dir, rest)
}

/// Serve a static asset, letting tower-http handle content type and ranges
pub async fn serve_asset(asset: PathBuf, request: Request<Body>) -> Response {
    debug!("Serving asset {}", asset.display());

    let result: Result<_, Infallible> = ServeFile::new(&asset).oneshot(request).await;
    match result {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
