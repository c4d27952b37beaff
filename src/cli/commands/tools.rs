//! `tsf tools`: list and run tools through a running REST server.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tabled::{Table, Tabled};

use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, parse_params, render_result, truncate_with_ellipsis};

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Debug, Deserialize)]
struct RunToolResponse {
    result: Value,
}

#[derive(Tabled)]
pub(crate) struct ToolDisplay {
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Parameters")]
    pub(crate) parameters: String,
    #[tabled(rename = "Description")]
    pub(crate) description: String,
}

impl From<&ToolInfo> for ToolDisplay {
    fn from(tool: &ToolInfo) -> Self {
        let parameters = tool
            .input_schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().cloned().collect::<Vec<_>>().join(", "))
            .filter(|names| !names.is_empty())
            .unwrap_or_else(|| "-".to_string());
        Self {
            name: tool.name.clone(),
            parameters,
            description: truncate_with_ellipsis(&tool.description, 60),
        }
    }
}

/// List the server's tools as a table or JSON
pub async fn list_tools(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let response = api_client.get("/api/list-tools").send().await?;
    let tools: Vec<ToolInfo> = ApiClient::handle_response(response).await?;

    if format == "json" {
        Ok(serde_json::to_string_pretty(&tools)?)
    } else {
        let display: Vec<ToolDisplay> = tools.iter().map(ToolDisplay::from).collect();
        let mut table = Table::new(display);
        apply_table_style(&mut table);
        Ok(format!("{}", table))
    }
}

/// Run a tool on the server
pub async fn run_tool(api_client: &ApiClient, name: &str, params: Option<&str>) -> CliResult<String> {
    let params = parse_params(params)?;

    let response = api_client
        .post("/api/run-tool")
        .json(&json!({"name": name, "params": params}))
        .send()
        .await?;
    let body: RunToolResponse = ApiClient::handle_response(response).await?;

    render_result(&body.result)
}
