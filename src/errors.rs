//! Error types for the proxy handler.
//!
//! The enum implements [`axum::response::IntoResponse`] so handlers can
//! simply return `Err(FrontError::Upstream(..))`. Transport-level
//! detail is logged, never sent to the caller.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

/// Fixed body returned for any upstream transport failure.
const UPSTREAM_ERROR_BODY: &str = "500 internal server error";

/// Errors a request handler can surface to the client.
#[derive(Debug, Error)]
pub enum FrontError {
    /// The upstream fetch failed at the transport level (DNS,
    /// connection refused, timeout). The caller sees a generic 500.
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for FrontError {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream(err) => {
                warn!("upstream fetch failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    UPSTREAM_ERROR_BODY,
                )
                    .into_response()
            }
        }
    }
}
