//! MCP over Streamable HTTP.

use std::net::IpAddr;

use axum::{Json, Router, routing::get};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use super::error::{TransportError, TransportResult};
use super::service::create_mcp_service;
use crate::sitefinity::SitefinityTools;

/// Streamable HTTP server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    transport: &'static str,
}

#[instrument]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        transport: "streamable-http",
    })
}

/// `/mcp` plus `/health`.
pub fn create_router(tools: SitefinityTools, cancellation_token: CancellationToken) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest_service("/mcp", create_mcp_service(tools, cancellation_token))
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl-C, then cancel open MCP sessions and drain.
pub async fn run(tools: SitefinityTools, config: Config) -> TransportResult<()> {
    let ct = CancellationToken::new();
    let app = create_router(tools, ct.child_token());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| TransportError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down MCP server");
            ct.cancel();
        })
        .await?;
    Ok(())
}
