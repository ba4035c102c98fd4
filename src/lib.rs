//! s3front library — static file server with an S3 bucket proxy.
//!
//! This crate provides the two halves of a small HTTP front door: a
//! static file handler rooted at a local directory, and a pass-through
//! proxy that forwards requests under a fixed URL prefix to an S3
//! bucket over HTTPS, relaying status, body, and a restricted set of
//! response headers.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod server;

use crate::config::Config;

/// Shared application state passed to handlers via `axum::extract::State`.
pub struct AppState {
    /// Server configuration, immutable after startup.
    pub config: Config,
    /// HTTP client for upstream fetches, shared across all requests.
    pub client: reqwest::Client,
}
