//! Bucket proxy handler.
//!
//! Forwards a request to a fixed S3 bucket over HTTPS and relays a
//! trimmed version of the response: the upstream status code, the body
//! streamed byte-for-byte, and exactly three response headers
//! (`Content-Type`, `Last-Modified`, `ETag`). Every other upstream
//! header is dropped. The upstream request is always a GET with no
//! additional headers; the inbound request body is ignored.
//!
//! There is no retry, no caching, and no timeout unless one is set in
//! the configuration. A transport failure contacting the bucket yields
//! a generic 500 response; the error detail is logged, never relayed.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Uri};
use axum::response::{IntoResponse, Response};
use tracing::info;

use crate::config::{Config, PROXY_PREFIX};
use crate::errors::FrontError;
use crate::AppState;

/// Response headers copied through from the upstream response.
const RELAYED_HEADERS: [HeaderName; 3] =
    [header::CONTENT_TYPE, header::LAST_MODIFIED, header::ETAG];

/// Proxy the request to the configured bucket and relay the response.
///
/// The inbound path (with [`PROXY_PREFIX`] stripped) and query string
/// are preserved verbatim; the scheme is always `https` regardless of
/// how the inbound request arrived.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Response, FrontError> {
    let path = strip_proxy_prefix(uri.path());
    let url = target_url(&state.config, path, uri.query());
    info!("proxying request to {}", url);

    let upstream = state.client.get(&url).send().await?;

    let status = upstream.status();
    let headers = relayed_headers(upstream.headers());
    // Stream the body through unbuffered. If the caller disconnects,
    // the stream is dropped and the copy silently truncates.
    let body = Body::from_stream(upstream.bytes_stream());

    Ok((status, headers, body).into_response())
}

/// Remove [`PROXY_PREFIX`] from `path`. A request to the bare prefix
/// maps to the bucket root.
fn strip_proxy_prefix(path: &str) -> &str {
    let rest = path.strip_prefix(PROXY_PREFIX).unwrap_or(path);
    if rest.is_empty() {
        "/"
    } else {
        rest
    }
}

/// Build the upstream target URL from the stripped path and the
/// original query string.
fn target_url(config: &Config, path: &str, query: Option<&str>) -> String {
    let base = match &config.endpoint {
        Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
        None => format!("https://{}.s3.amazonaws.com", config.bucket),
    };
    match query {
        Some(query) => format!("{base}{path}?{query}"),
        None => format!("{base}{path}"),
    }
}

/// Copy the relayed headers out of the upstream response. Headers the
/// upstream lacks are set to an empty value.
fn relayed_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(RELAYED_HEADERS.len());
    for name in RELAYED_HEADERS {
        let value = upstream
            .get(&name)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(""));
        headers.insert(name, value);
    }
    headers
}
