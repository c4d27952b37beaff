pub mod api;
pub mod cli;
pub mod config;
pub mod http;
pub mod mcp;
pub mod sitefinity;
pub mod telemetry;

#[cfg(test)]
mod test_support;

/// Product name shown by the REST root endpoint and the CLI.
pub const APP_NAME: &str = "TahubuSF";
