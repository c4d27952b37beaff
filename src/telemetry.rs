//! Tracing subscriber setup shared by every front-end.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "tahubu_sf=info,tower_http=info";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Stdout,
    /// Required when stdout carries the MCP stdio protocol.
    Stderr,
}

/// Filter from `RUST_LOG`, falling back to info for this crate and tower-http.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(output: Output) {
    let registry = tracing_subscriber::registry().with(env_filter());
    let _ = match output {
        Output::Stdout => registry.with(fmt::layer()).try_init(),
        Output::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
            .try_init(),
    };
}
