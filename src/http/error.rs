//! Failures surfaced by the request pipeline.

use miette::Diagnostic;
use thiserror::Error;

use super::Method;

#[derive(Error, Diagnostic, Debug)]
pub enum PipelineError {
    #[error("Could not reach {url}: {source}")]
    #[diagnostic(
        code(tahubu_sf::http::transport),
        help("Check SITEFINITY_SITE_PREFIX and that the Sitefinity site is reachable.")
    )]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Sitefinity returned HTTP {status} for {url}")]
    #[diagnostic(code(tahubu_sf::http::status))]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Could not decode response from {url}: {message}")]
    #[diagnostic(code(tahubu_sf::http::decode))]
    Decode { url: String, message: String },
}

impl PipelineError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        PipelineError::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn decode(url: &str, message: impl Into<String>) -> Self {
        PipelineError::Decode {
            url: url.to_string(),
            message: message.into(),
        }
    }

    /// HTTP status for [`PipelineError::HttpStatus`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            PipelineError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether another attempt may be made after this failure.
    ///
    /// GET retries transport and status failures. POST only retries when
    /// the connection was never established, so a create cannot be applied
    /// twice by the CMS.
    pub fn is_retryable(&self, method: Method) -> bool {
        match (self, method) {
            (PipelineError::Transport { .. }, Method::Get) => true,
            (PipelineError::Transport { source, .. }, Method::Post) => source.is_connect(),
            (PipelineError::HttpStatus { .. }, Method::Get) => true,
            (PipelineError::HttpStatus { .. }, Method::Post) => false,
            (PipelineError::Decode { .. }, _) => false,
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
