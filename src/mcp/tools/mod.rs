//! MCP tool methods, grouped by concern.
//!
//! - content: read tools rendering text
//! - authoring: parent lookups and create tools

mod authoring;
mod content;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde_json::json;

use crate::sitefinity::{ToolError, ToolOutput, ToolResult};

/// Wrap a tool result for the MCP client.
pub(crate) fn respond(result: ToolResult<ToolOutput>) -> Result<CallToolResult, McpError> {
    result
        .map(|output| CallToolResult::success(vec![Content::text(output.to_text())]))
        .map_err(to_mcp_error)
}

pub(crate) fn to_mcp_error(e: ToolError) -> McpError {
    match &e {
        ToolError::UnknownTool { .. } | ToolError::InvalidArguments { .. } => {
            McpError::invalid_params(e.to_string(), None)
        }
        ToolError::Pipeline(pipeline) => McpError::internal_error(
            e.to_string(),
            Some(json!({"status": pipeline.status()})),
        ),
        ToolError::UnexpectedShape { .. } => McpError::internal_error(e.to_string(), None),
    }
}
