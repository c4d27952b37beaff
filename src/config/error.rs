//! Configuration error types.
//!
//! Every variant is fatal: configuration is validated once at startup,
//! before any request reaches the CMS.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Missing required setting: {name}")]
    #[diagnostic(
        code(tahubu_sf::config::missing),
        help("Set {name} in the environment or in a .env file next to the binary.")
    )]
    Missing { name: String },

    #[error("Invalid value for {name}: '{value}' ({reason})")]
    #[diagnostic(code(tahubu_sf::config::invalid_value))]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Invalid Sitefinity site URL '{value}': {reason}")]
    #[diagnostic(
        code(tahubu_sf::config::invalid_url),
        help("Use an absolute URL such as https://www.example.com")
    )]
    InvalidUrl { value: String, reason: String },

    #[error("Unknown auth type '{value}'")]
    #[diagnostic(
        code(tahubu_sf::config::unknown_auth_type),
        help("Supported values: none, apikey, accesskey, usernamepassword")
    )]
    UnknownAuthType { value: String },

    #[error("Auth type '{mode}' requires {name}")]
    #[diagnostic(code(tahubu_sf::config::missing_credential))]
    MissingCredential { mode: String, name: String },

    #[error("Invalid retry settings: {message}")]
    #[diagnostic(code(tahubu_sf::config::invalid_retry))]
    InvalidRetry { message: String },

    #[error("Failed to build HTTP client: {message}")]
    #[diagnostic(code(tahubu_sf::config::http_client))]
    HttpClient { message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
