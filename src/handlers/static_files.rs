//! Static file handler.
//!
//! A thin wrapper around [`tower_http::services::ServeDir`], which
//! implements the file-server conventions this crate relies on:
//! content-type inference from the file extension, `index.html` for
//! directory paths, 404 for missing files, and 500-class responses for
//! I/O errors. No retries.

use std::path::Path;

use tower_http::services::ServeDir;

/// Build the static file service rooted at `root`.
pub fn service(root: &Path) -> ServeDir {
    ServeDir::new(root)
}
