//! Configuration types for s3front.
//!
//! All configuration comes from command-line flags, is gathered into a
//! single [`Config`] at startup, and never changes afterwards. There
//! are no process-wide mutable globals.

use std::path::PathBuf;
use std::time::Duration;

/// URL path prefix that routes a request to the bucket proxy instead of
/// the static file handler. Stripped before the proxy builds the
/// upstream target.
pub const PROXY_PREFIX: &str = "/api/s3proxy";

/// Immutable server configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address the server listens on.
    pub addr: String,

    /// Root directory for the static file handler.
    pub static_root: PathBuf,

    /// S3 bucket name; the proxy target host is
    /// `<bucket>.s3.amazonaws.com`.
    pub bucket: String,

    /// Optional upstream base-URL override. When `None`, proxied
    /// requests target `https://<bucket>.s3.amazonaws.com`. Set this to
    /// point the proxy at an alternative S3-compatible endpoint.
    pub endpoint: Option<String>,

    /// Timeout applied to upstream fetches. `None` means unbounded:
    /// a slow or hanging upstream holds its serving task indefinitely.
    /// Unbounded is the deliberate default, not an omission.
    pub upstream_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            static_root: default_static_root(),
            bucket: default_bucket(),
            endpoint: None,
            upstream_timeout: None,
        }
    }
}

// -- Defaults ----------------------------------------------------------------

pub(crate) fn default_addr() -> String {
    "0.0.0.0:8476".to_string()
}

pub(crate) fn default_static_root() -> PathBuf {
    PathBuf::from("./build")
}

pub(crate) fn default_bucket() -> String {
    "gnosis-dev-dfusion".to_string()
}

// -- HTTP client -------------------------------------------------------------

/// Build the upstream HTTP client from `config`.
///
/// The client carries no timeout unless `config.upstream_timeout` is
/// set; see [`Config::upstream_timeout`].
pub fn http_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.upstream_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.addr, "0.0.0.0:8476");
        assert_eq!(config.static_root, PathBuf::from("./build"));
        assert_eq!(config.bucket, "gnosis-dev-dfusion");
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_upstream_timeout_defaults_to_unbounded() {
        // The absence of an upstream timeout is a documented default,
        // not an accident.
        let config = Config::default();
        assert!(config.upstream_timeout.is_none());
        assert!(http_client(&config).is_ok());
    }
}
