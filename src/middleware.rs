use std::sync::LazyLock;

use axum::{
    body::{Body, to_bytes},
    http::header,
    response::Response,
};

static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_doctype: false,
    minify_css: true,
    minify_js: true,
    ..Default::default()
});

/// Shrinks text/html responses before they leave the server. Skipped in
/// debug builds so rendered markup stays readable during development.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if cfg!(debug_assertions) {
        return response;
    }

    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("text/html"));

    if !is_html {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let minified = minify_html::minify(&bytes, &MINIFY_CFG);

    Response::from_parts(parts, Body::from(minified))
}
