//! Router assembly.

mod common;
mod todo;

pub use common::common_routes;
pub use todo::todo_routes;

use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// CORS for the configured origins. Unparseable origins are skipped; an empty list allows none.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %s, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Full application: common + todo routes with request tracing and CORS.
pub fn app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(todo_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origins)),
        )
}
