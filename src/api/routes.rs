//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::root;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .layer(TraceLayer::new_for_http())
}
