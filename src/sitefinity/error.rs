use miette::Diagnostic;
use thiserror::Error;

use crate::http::PipelineError;

#[derive(Error, Diagnostic, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    #[diagnostic(
        code(tahubu_sf::tools::unknown),
        help("List the available tools with `tsf tools list`.")
    )]
    UnknownTool { name: String },

    #[error("Invalid arguments for {tool}: {message}")]
    #[diagnostic(code(tahubu_sf::tools::invalid_arguments))]
    InvalidArguments { tool: String, message: String },

    #[error("Sitefinity request failed: {0}")]
    #[diagnostic(code(tahubu_sf::tools::pipeline))]
    Pipeline(#[from] PipelineError),

    #[error("Unexpected response from {entity}: {message}")]
    #[diagnostic(code(tahubu_sf::tools::unexpected_shape))]
    UnexpectedShape { entity: String, message: String },
}

impl ToolError {
    pub(crate) fn invalid(tool: &str, message: impl Into<String>) -> Self {
        ToolError::InvalidArguments {
            tool: tool.to_string(),
            message: message.into(),
        }
    }
}

pub type ToolResult<T> = Result<T, ToolError>;
