use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum TransportError {
    #[error("Failed to bind {addr}")]
    #[diagnostic(
        code(tahubu_sf::mcp::bind),
        help("Is another process already listening on this port? Try --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(tahubu_sf::mcp::serve))]
    Serve(#[from] std::io::Error),

    #[error("MCP session failed to initialize: {message}")]
    #[diagnostic(code(tahubu_sf::mcp::initialize))]
    Initialize { message: String },

    #[error("MCP session ended abnormally: {message}")]
    #[diagnostic(code(tahubu_sf::mcp::session))]
    Session { message: String },
}

pub type TransportResult<T> = Result<T, TransportError>;
