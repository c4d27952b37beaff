//! MCP Streamable HTTP service creation
//!
//! The returned service can be nested into an Axum router.

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use super::server::McpServer;
use crate::sitefinity::SitefinityTools;

/// Create the MCP Streamable HTTP service.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use tahubu_sf::config::Settings;
/// # use tahubu_sf::mcp::create_mcp_service;
/// # use tahubu_sf::sitefinity::SitefinityTools;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let tools = SitefinityTools::from_settings(&Settings::new("https://cms.example.com")?)?;
///
/// let ct = CancellationToken::new();
/// let app: Router = Router::new().nest_service("/mcp", create_mcp_service(tools, ct));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    tools: SitefinityTools,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer, LocalSessionManager> {
    // One McpServer per session; they share the client and its token cache.
    // rmcp expects an io::Error from the factory.
    let service_factory =
        move || -> Result<McpServer, std::io::Error> { Ok(McpServer::new(tools.clone())) };

    let config = StreamableHttpServerConfig::default()
        .with_sse_keep_alive(None) // Use default (15s)
        .with_sse_retry(None)
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
