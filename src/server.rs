//! Axum router construction.
//!
//! The [`app`] function wires the two handlers: paths under the proxy
//! prefix dispatch to the bucket proxy, everything else falls through
//! to the static file service. Exactly one handler runs per request;
//! there is no fallback chaining between them.

use std::sync::Arc;

use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::PROXY_PREFIX;
use crate::handlers::{proxy, static_files};
use crate::AppState;

/// Build the axum [`Router`], ready to be passed to `axum::serve`.
///
/// All HTTP methods under the proxy prefix reach the proxy handler,
/// which always issues a GET upstream. The wildcard route does not
/// match the bare prefix or the prefix with a trailing slash, so those
/// are registered separately.
pub fn app(state: Arc<AppState>) -> Router {
    let static_root = state.config.static_root.clone();
    Router::new()
        .route(PROXY_PREFIX, any(proxy::handle))
        .route(&format!("{PROXY_PREFIX}/"), any(proxy::handle))
        .route(&format!("{PROXY_PREFIX}/*key"), any(proxy::handle))
        .fallback_service(static_files::service(&static_root))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
