//! Name-based tool invocation for the REST API and the CLI.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use super::SitefinityTools;
use super::error::{ToolError, ToolResult};
use super::params::BlogPostIdParams;
use crate::http::ResponseEnvelope;

/// Every tool name [`SitefinityTools::invoke`] accepts.
pub const TOOL_NAMES: &[&str] = &[
    "get_news",
    "get_blog_posts",
    "get_blog_post_by_id",
    "get_pages",
    "get_page_templates",
    "get_sites",
    "get_list_items",
    "get_events",
    "get_shared_content",
    "get_images",
    "get_documents",
    "get_videos",
    "get_search_indexes",
    "get_taxonomies",
    "get_section_presets",
    "get_forms",
    "get_parent_blogs",
    "get_parent_lists",
    "get_calendars",
    "get_albums",
    "get_document_libraries",
    "get_video_libraries",
    "create_news_item",
    "create_blog_post",
    "create_list_item",
    "create_event",
    "create_image",
    "create_document",
    "create_video",
];

/// Result of a tool call in one of its three shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Text(String),
    Lookup(BTreeMap<String, String>),
    Record(ResponseEnvelope),
}

impl ToolOutput {
    pub fn into_json(self) -> Value {
        match self {
            ToolOutput::Text(text) => Value::String(text),
            ToolOutput::Lookup(map) => Value::Object(
                map.into_iter()
                    .map(|(id, title)| (id, Value::String(title)))
                    .collect(),
            ),
            ToolOutput::Record(record) => Value::Object(record),
        }
    }

    /// Text as-is, mappings as pretty-printed JSON.
    pub fn to_text(&self) -> String {
        match self {
            ToolOutput::Text(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_default(),
        }
    }
}

impl SitefinityTools {
    /// Invoke the tool called `name` with a JSON object of arguments.
    ///
    /// `null` counts as no arguments.
    #[instrument(skip(self, args))]
    pub async fn invoke(&self, name: &str, args: Value) -> ToolResult<ToolOutput> {
        use ToolOutput::{Lookup, Record, Text};

        let output = match name {
            "get_news" => Text(self.get_news(&parse(name, args)?).await?),
            "get_blog_posts" => Text(self.get_blog_posts(&parse(name, args)?).await?),
            "get_blog_post_by_id" => {
                let params: BlogPostIdParams = parse(name, args)?;
                Text(self.get_blog_post_by_id(&params.post_id).await?)
            }
            "get_pages" => Text(self.get_pages(&parse(name, args)?).await?),
            "get_page_templates" => Text(self.get_page_templates(&parse(name, args)?).await?),
            "get_sites" => Text(self.get_sites(&parse(name, args)?).await?),
            "get_list_items" => Text(self.get_list_items(&parse(name, args)?).await?),
            "get_events" => Text(self.get_events(&parse(name, args)?).await?),
            "get_shared_content" => Text(self.get_shared_content(&parse(name, args)?).await?),
            "get_images" => Text(self.get_images(&parse(name, args)?).await?),
            "get_documents" => Text(self.get_documents(&parse(name, args)?).await?),
            "get_videos" => Text(self.get_videos(&parse(name, args)?).await?),
            "get_search_indexes" => Text(self.get_search_indexes(&parse(name, args)?).await?),
            "get_taxonomies" => Text(self.get_taxonomies(&parse(name, args)?).await?),
            "get_section_presets" => Text(self.get_section_presets(&parse(name, args)?).await?),
            "get_forms" => Text(self.get_forms(&parse(name, args)?).await?),
            "get_parent_blogs" => {
                no_args(name, &args)?;
                Lookup(self.get_parent_blogs().await?)
            }
            "get_parent_lists" => {
                no_args(name, &args)?;
                Lookup(self.get_parent_lists().await?)
            }
            "get_calendars" => {
                no_args(name, &args)?;
                Lookup(self.get_calendars().await?)
            }
            "get_albums" => {
                no_args(name, &args)?;
                Lookup(self.get_albums().await?)
            }
            "get_document_libraries" => {
                no_args(name, &args)?;
                Lookup(self.get_document_libraries().await?)
            }
            "get_video_libraries" => {
                no_args(name, &args)?;
                Lookup(self.get_video_libraries().await?)
            }
            "create_news_item" => Record(self.create_news_item(parse(name, args)?).await?),
            "create_blog_post" => Record(self.create_blog_post(parse(name, args)?).await?),
            "create_list_item" => Record(self.create_list_item(parse(name, args)?).await?),
            "create_event" => Record(self.create_event(parse(name, args)?).await?),
            "create_image" => Record(self.create_image(parse(name, args)?).await?),
            "create_document" => Record(self.create_document(parse(name, args)?).await?),
            "create_video" => Record(self.create_video(parse(name, args)?).await?),
            _ => {
                return Err(ToolError::UnknownTool {
                    name: name.to_string(),
                });
            }
        };
        Ok(output)
    }
}

fn parse<T: DeserializeOwned>(tool: &str, args: Value) -> ToolResult<T> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        Value::Object(_) => args,
        _ => return Err(ToolError::invalid(tool, "arguments must be a JSON object")),
    };
    serde_json::from_value(args).map_err(|e| ToolError::invalid(tool, e.to_string()))
}

fn no_args(tool: &str, args: &Value) -> ToolResult<()> {
    match args {
        Value::Null | Value::Object(_) => Ok(()),
        _ => Err(ToolError::invalid(tool, "arguments must be a JSON object")),
    }
}
