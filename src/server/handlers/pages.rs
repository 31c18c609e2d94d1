use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use log::debug;

use crate::layout::render_page;
use crate::server::handlers::static_files::{find_asset, find_project_asset, serve_asset};
use crate::server::types::AppState;

/// Catch-all handler: static asset if one matches, otherwise a page
///
/// A `/projects/...` path with no matching file falls through to the pages.
pub async fn handle_request(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = decode_path(request.uri().path());

    let asset = find_asset(&state.public_dir, &path)
        .or_else(|| find_project_asset(&state.projects_dir, &path));
    if let Some(asset) = asset {
        return serve_asset(asset, request).await;
    }

    let slug = slug_from_path(&path);
    let site = state.site.snapshot();

    match site.page(slug) {
        Some(page) => {
            debug!("Rendering /{}", slug);
            Html(render_page(page, site.templates())).into_response()
        }
        None => {
            debug!("No page for /{}", slug);
            (StatusCode::NOT_FOUND, Html(not_found_document(slug))).into_response()
        }
    }
}

/// Percent-decode a request path, keeping it as-is when it is not valid UTF-8
pub fn decode_path(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Strip one leading and one trailing `/` to get the slug
pub fn slug_from_path(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Page returned for an unknown slug
pub fn not_found_document(slug: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>404 - Page Not Found</title>
  <link rel="stylesheet" href="/css/styles.css">
</head>
<body class="flex items-center justify-center h-screen bg-gray-100">
  <div class="text-center">
    <h1 class="text-6xl font-bold text-gray-800">404</h1>
    <p class="text-xl text-gray-600 mt-4">Page not found: /{}</p>
    <a href="/" class="mt-8 inline-block px-6 py-3 bg-blue-500 text-white rounded hover:bg-blue-600">Go Home</a>
  </div>
</body>
</html>
"#,
        html_escape::encode_text(slug)
    )
}
