use miette::Diagnostic;
use thiserror::Error;

/// Failures of the `tsf tools` client commands.
#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Could not reach the TahubuSF API server")]
    #[diagnostic(
        code(tahubu_sf::cli::unreachable),
        help("Start one with `tsf api`, or point --api-url / TSF_API_URL at a running server.")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Unreadable reply from the API server: {message}")]
    #[diagnostic(
        code(tahubu_sf::cli::bad_reply),
        help("Client and server may be different tsf versions.")
    )]
    InvalidResponse { message: String },

    #[error("Server answered {status}: {message}")]
    #[diagnostic(code(tahubu_sf::cli::server_error))]
    ApiError { status: u16, message: String },

    #[error("Invalid --params: {message}")]
    #[diagnostic(
        code(tahubu_sf::cli::invalid_params),
        help("Pass a JSON object, e.g. --params '{{\"top\": 5}}'")
    )]
    InvalidParams { message: String },
}

impl From<reqwest::Error> for CliError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_connect() || source.is_timeout() {
            return CliError::ConnectionFailed { source };
        }
        CliError::InvalidResponse {
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: format!("JSON: {}", e),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
