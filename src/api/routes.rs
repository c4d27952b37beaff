//! API route configuration.

use axum::Router;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, ErrorResponse, HealthResponse, RunToolRequest, RunToolResponse, ToolInfo,
};
use super::state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TahubuSF API",
        description = "Sitefinity CMS tools over REST",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_tools,
        handlers::run_tool,
    ),
    components(
        schemas(
            HealthResponse,
            ToolInfo,
            RunToolRequest,
            RunToolResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "tools", description = "Sitefinity tool listing and invocation")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router(state: AppState) -> Router {
    let api = ApiDoc::openapi();

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/list-tools", get(handlers::list_tools))
        .route("/api/run-tool", post(handlers::run_tool))
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
