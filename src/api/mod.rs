//! REST front-end for the Sitefinity tools.

mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod mod_test;

use std::net::IpAddr;

use miette::Diagnostic;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::sitefinity::SitefinityTools;

pub use routes::{ApiDoc, create_router};
pub use state::AppState;

/// API server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
        }
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}")]
    #[diagnostic(
        code(tahubu_sf::api::bind),
        help("Is another process already listening on this port? Try --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(tahubu_sf::api::serve))]
    Serve(#[from] std::io::Error),
}

/// Full application: routes, docs, CORS and request tracing.
pub fn app(tools: SitefinityTools) -> axum::Router {
    create_router(AppState::new(tools))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the API server with the given configuration
pub async fn run(tools: SitefinityTools, config: Config) -> Result<(), ApiError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("API server listening on http://{}", addr);
    info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app(tools))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down API server");
        })
        .await?;
    Ok(())
}
