//! API documentation: OpenAPI JSON and the RapiDoc viewer.

use crate::doc::ApiDoc;
use axum::Router;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub const SPEC_PATH: &str = "/apispec.json";
pub const UI_PATH: &str = "/apidocs";

/// GET /apispec.json and GET /apidocs.
pub fn docs_routes() -> Router {
    Router::new().merge(RapiDoc::with_openapi(SPEC_PATH, ApiDoc::openapi()).path(UI_PATH))
}
