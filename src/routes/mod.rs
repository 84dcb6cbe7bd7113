//! Router assembly: common, entity and documentation routes behind tracing and a body limit.

mod common;
mod docs;
mod entity;

pub use common::common_routes;
pub use docs::{docs_routes, SPEC_PATH, UI_PATH};
pub use entity::entity_routes;

use crate::config::Settings;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// The full application router. The body limit applies inside the JSON extractor, so an
/// oversized body is rejected with the usual error body.
pub fn app(state: AppState, settings: &Settings) -> Router {
    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state));
    if settings.api_docs {
        router = router.merge(docs_routes());
    }
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(settings.body_limit_bytes)),
    )
}
