//! HTTP request handlers: the static file handler and the bucket proxy.

pub mod proxy;
pub mod static_files;
