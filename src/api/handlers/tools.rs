//! Tool listing and invocation handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::mcp::McpServer;
use crate::sitefinity::ToolError;

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Tool description
#[derive(Serialize, ToSchema)]
pub struct ToolInfo {
    #[schema(example = "get_news")]
    pub name: String,
    #[schema(example = "Get news items: title, summary, author and publication date")]
    pub description: String,
    /// JSON Schema of the tool's parameters
    #[schema(value_type = Object)]
    pub input_schema: Value,
}

/// Tool invocation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RunToolRequest {
    #[schema(example = "get_news")]
    pub name: String,
    /// Tool arguments; omitted means none
    #[serde(default)]
    #[schema(value_type = Object)]
    pub params: Value,
}

/// Tool invocation result: text, an id to title map, or the CMS response
#[derive(Serialize, ToSchema)]
pub struct RunToolResponse {
    #[schema(value_type = Object)]
    pub result: Value,
}

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Unknown tool: get_nothing")]
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn error_response(e: ToolError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        ToolError::UnknownTool { .. } => StatusCode::NOT_FOUND,
        ToolError::InvalidArguments { .. } => StatusCode::BAD_REQUEST,
        ToolError::Pipeline(_) | ToolError::UnexpectedShape { .. } => StatusCode::BAD_GATEWAY,
    };
    if status.is_server_error() {
        warn!("Tool call failed: {}", e);
    }
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// List all tools
#[utoipa::path(
    get,
    path = "/api/list-tools",
    tag = "tools",
    responses(
        (status = 200, description = "Available tools", body = Vec<ToolInfo>)
    )
)]
#[instrument]
pub async fn list_tools() -> Json<Vec<ToolInfo>> {
    let tools = McpServer::tool_catalog()
        .into_iter()
        .map(|tool| ToolInfo {
            name: tool.name.to_string(),
            description: tool
                .description
                .map(|d| d.to_string())
                .unwrap_or_default(),
            input_schema: Value::Object(tool.input_schema.as_ref().clone()),
        })
        .collect();
    Json(tools)
}

/// Run a tool by name
#[utoipa::path(
    post,
    path = "/api/run-tool",
    tag = "tools",
    request_body = RunToolRequest,
    responses(
        (status = 200, description = "Tool result", body = RunToolResponse),
        (status = 400, description = "Invalid arguments", body = ErrorResponse),
        (status = 404, description = "Unknown tool", body = ErrorResponse),
        (status = 502, description = "Sitefinity request failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state, req), fields(tool = %req.name))]
pub async fn run_tool(
    State(state): State<AppState>,
    Json(req): Json<RunToolRequest>,
) -> ApiResult<RunToolResponse> {
    let output = state
        .tools()
        .invoke(&req.name, req.params)
        .await
        .map_err(error_response)?;

    Ok(Json(RunToolResponse {
        result: output.into_json(),
    }))
}
