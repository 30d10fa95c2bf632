//! Embedded static asset serving.
//!
//! Everything under `static/public` is compiled into the binary and served from
//! the site root, so `static/public/css/styles.css` answers `/css/styles.css`.

use std::borrow::Cow;

use axum::{
    body::Body,
    http::{HeaderValue, Request, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use include_dir::{Dir, include_dir};
use mime_guess::{Mime, MimeGuess};

use crate::application::error::ErrorReport;

static STATIC_PUBLIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static/public");

const SOURCE: &str = "infra::assets::serve_public";

/// Router fallback: answer with the embedded asset matching the request path.
pub async fn serve_public(request: Request<Body>) -> Response {
    match resolve_asset(&STATIC_PUBLIC_ASSETS, request.uri().path()) {
        Some(asset) => asset.into_response(),
        None => not_found_response(),
    }
}

fn not_found_response() -> Response {
    let mut response = (StatusCode::NOT_FOUND, "Not found").into_response();
    ErrorReport::from_message(SOURCE, StatusCode::NOT_FOUND, "Static asset not found")
        .attach(&mut response);
    response
}

struct Asset<'a> {
    contents: Cow<'a, [u8]>,
    mime: MimeGuess,
}

fn resolve_asset(bundle: &'static Dir<'static>, path: &str) -> Option<Asset<'static>> {
    let candidate = path.trim_start_matches('/');

    if candidate.is_empty() || candidate.ends_with('/') || candidate.contains("..") {
        // No directory listings, no traversal.
        return None;
    }

    let file = bundle.get_file(candidate)?;
    let mime = mime_guess::from_path(candidate);
    Some(Asset {
        contents: Cow::Borrowed(file.contents()),
        mime,
    })
}

impl IntoResponse for Asset<'static> {
    fn into_response(self) -> Response {
        let mime = self.mime.first_or_octet_stream();
        match self.contents {
            Cow::Borrowed(slice) => build_response(Bytes::from_static(slice), mime),
            Cow::Owned(bytes) => build_response(Bytes::from(bytes), mime),
        }
    }
}

fn build_response(bytes: Bytes, mime: Mime) -> Response {
    let len = bytes.len();
    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = StatusCode::OK;

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(&len.to_string()) {
        headers.insert(header::CONTENT_LENGTH, value);
    }
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=3600"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        let asset = resolve_asset(&STATIC_PUBLIC_ASSETS, "/css/styles.css").expect("stylesheet");
        assert_eq!(asset.mime.first_or_octet_stream().as_ref(), "text/css");
        assert!(!asset.contents.is_empty());
    }

    #[test]
    fn traversal_and_directories_are_rejected() {
        assert!(resolve_asset(&STATIC_PUBLIC_ASSETS, "/").is_none());
        assert!(resolve_asset(&STATIC_PUBLIC_ASSETS, "/css/").is_none());
        assert!(resolve_asset(&STATIC_PUBLIC_ASSETS, "/../Cargo.toml").is_none());
    }
}
