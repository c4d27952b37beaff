//! MCP over stdin/stdout.

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

use super::error::{TransportError, TransportResult};
use super::server::McpServer;
use crate::sitefinity::SitefinityTools;

/// Serve until the client closes stdin.
///
/// stdout carries the protocol, so logging must already be routed to
/// stderr.
pub async fn run_stdio(tools: SitefinityTools) -> TransportResult<()> {
    info!("Starting MCP server on stdio");

    let server = McpServer::new(tools)
        .serve(stdio())
        .await
        .map_err(|e| TransportError::Initialize {
            message: e.to_string(),
        })?;

    let quit_reason = server.waiting().await.map_err(|e| TransportError::Session {
        message: e.to_string(),
    })?;
    info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
