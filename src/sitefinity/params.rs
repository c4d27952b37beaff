//! Tool arguments.
//!
//! Shared by the MCP tools (schemas come from `JsonSchema`) and by the
//! name-based dispatcher used by the REST API and the CLI.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

use super::endpoints::is_guid_like;
use super::error::{ToolError, ToolResult};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListParams {
    #[schemars(description = "Maximum number of items to return ($top)")]
    pub top: Option<u32>,
    #[schemars(description = "Number of items to skip ($skip)")]
    pub skip: Option<u32>,
}

impl ListParams {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(top) = self.top {
            query.push(("$top", top.to_string()));
        }
        if let Some(skip) = self.skip {
            query.push(("$skip", skip.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlogPostIdParams {
    #[schemars(description = "ID (GUID) of the blog post")]
    pub post_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateNewsItemParams {
    #[schemars(description = "Title of the news item")]
    pub title: String,
    #[schemars(description = "Body of the news item (HTML allowed)")]
    #[serde(default)]
    pub content: String,
    #[schemars(description = "Short summary (optional)")]
    pub summary: Option<String>,
    #[schemars(description = "Author name (optional)")]
    pub author: Option<String>,
    #[schemars(description = "Create as a draft through the management API (default: true)")]
    #[serde(default = "default_true")]
    pub draft: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateBlogPostParams {
    #[schemars(description = "Title of the blog post")]
    pub title: String,
    #[schemars(description = "Body of the blog post (HTML allowed)")]
    #[serde(default)]
    pub content: String,
    #[schemars(description = "ID of the parent blog (see get_parent_blogs)")]
    pub parent_id: String,
    #[schemars(description = "Short summary (optional)")]
    pub summary: Option<String>,
    #[schemars(description = "Allow comments on the post (default: true)")]
    #[serde(default = "default_true")]
    pub allow_comments: bool,
    #[schemars(description = "Create as a draft through the management API (default: true)")]
    #[serde(default = "default_true")]
    pub draft: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateListItemParams {
    #[schemars(description = "Title of the list item")]
    pub title: String,
    #[schemars(description = "Body of the list item (HTML allowed)")]
    #[serde(default)]
    pub content: String,
    #[schemars(description = "ID of the parent list (see get_parent_lists)")]
    pub parent_id: String,
    #[schemars(description = "Create as a draft through the management API (default: true)")]
    #[serde(default = "default_true")]
    pub draft: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateEventParams {
    #[schemars(description = "Title of the event")]
    pub title: String,
    #[schemars(description = "Short summary of the event")]
    #[serde(default)]
    pub summary: String,
    #[schemars(description = "Body of the event (HTML allowed)")]
    #[serde(default)]
    pub content: String,
    #[schemars(description = "Start, RFC 3339 or YYYY-MM-DDTHH:MM:SS (UTC)")]
    pub event_start: String,
    #[schemars(description = "End, RFC 3339 or YYYY-MM-DDTHH:MM:SS (UTC)")]
    pub event_end: String,
    #[schemars(description = "ID of the parent calendar (see get_calendars)")]
    pub parent_id: String,
    #[schemars(description = "Create as a draft through the management API (default: true)")]
    #[serde(default = "default_true")]
    pub draft: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateImageParams {
    #[schemars(description = "Title of the image")]
    pub title: String,
    #[schemars(description = "ID of the parent album (see get_albums)")]
    pub parent_id: String,
    #[schemars(description = "Alternative text (optional)")]
    pub alternative_text: Option<String>,
    #[schemars(description = "Create as a draft through the management API (default: true)")]
    #[serde(default = "default_true")]
    pub draft: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateDocumentParams {
    #[schemars(description = "Title of the document")]
    pub title: String,
    #[schemars(description = "Description of the document (HTML allowed)")]
    #[serde(default)]
    pub content: String,
    #[schemars(description = "ID of the parent document library (see get_document_libraries)")]
    pub parent_id: String,
    #[schemars(description = "Short summary (optional)")]
    pub summary: Option<String>,
    #[schemars(description = "Create as a draft through the management API (default: true)")]
    #[serde(default = "default_true")]
    pub draft: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateVideoParams {
    #[schemars(description = "Title of the video")]
    pub title: String,
    #[schemars(description = "Description of the video (HTML allowed)")]
    #[serde(default)]
    pub content: String,
    #[schemars(description = "ID of the parent video library (see get_video_libraries)")]
    pub parent_id: String,
    #[schemars(description = "Create as a draft through the management API (default: true)")]
    #[serde(default = "default_true")]
    pub draft: bool,
}

/// Trimmed, non-empty value of a required text argument.
pub(crate) fn required(tool: &str, name: &str, value: &str) -> ToolResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ToolError::invalid(tool, format!("'{}' is required", name)));
    }
    Ok(value.to_string())
}

pub(crate) fn parent_id(tool: &str, value: &str) -> ToolResult<String> {
    let id = required(tool, "parent_id", value)?;
    if !is_guid_like(&id) {
        return Err(ToolError::invalid(
            tool,
            format!("'parent_id' must be a GUID, got '{}'", id),
        ));
    }
    Ok(id)
}

/// Parse an event time. Values without an offset are taken as UTC.
pub(crate) fn event_time(tool: &str, name: &str, value: &str) -> ToolResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            ToolError::invalid(
                tool,
                format!("'{}' is not a valid date and time: '{}'", name, value),
            )
        })
}

/// Timestamp format the CMS expects, UTC with a `Z` suffix.
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
