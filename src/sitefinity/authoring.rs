//! Parent lookups and create tools.

use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::{Map, Value, json};
use tracing::info;

use super::SitefinityTools;
use super::endpoints::{Area, EntitySet};
use super::error::{ToolError, ToolResult};
use super::format::id_title_map;
use super::params::{
    CreateBlogPostParams, CreateDocumentParams, CreateEventParams, CreateImageParams,
    CreateListItemParams, CreateNewsItemParams, CreateVideoParams, event_time, parent_id,
    required, timestamp,
};
use super::slug::url_name;
use crate::http::ResponseEnvelope;

impl SitefinityTools {
    async fn lookup(&self, set: EntitySet) -> ToolResult<BTreeMap<String, String>> {
        let url = self.endpoints.collection(Area::Content, set);
        let body = self.client.get(&url, &[]).await?;
        let map = id_title_map(set, &body)?;
        info!(count = map.len(), "Found {}", set.label());
        Ok(map)
    }

    pub async fn get_parent_blogs(&self) -> ToolResult<BTreeMap<String, String>> {
        self.lookup(EntitySet::Blogs).await
    }

    pub async fn get_parent_lists(&self) -> ToolResult<BTreeMap<String, String>> {
        self.lookup(EntitySet::Lists).await
    }

    pub async fn get_calendars(&self) -> ToolResult<BTreeMap<String, String>> {
        self.lookup(EntitySet::Calendars).await
    }

    pub async fn get_albums(&self) -> ToolResult<BTreeMap<String, String>> {
        self.lookup(EntitySet::Albums).await
    }

    pub async fn get_document_libraries(&self) -> ToolResult<BTreeMap<String, String>> {
        self.lookup(EntitySet::DocumentLibraries).await
    }

    pub async fn get_video_libraries(&self) -> ToolResult<BTreeMap<String, String>> {
        self.lookup(EntitySet::VideoLibraries).await
    }

    async fn create(
        &self,
        tool: &str,
        set: EntitySet,
        draft: bool,
        body: Map<String, Value>,
    ) -> ToolResult<ResponseEnvelope> {
        let area = if draft { Area::Management } else { Area::Content };
        let url = self.endpoints.collection(area, set);
        info!(tool, url = %url, draft, title = ?body.get("Title"), "Creating content");

        let response = self.client.post(&url, Value::Object(body)).await?;

        let id = response
            .get("Id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown");
        info!(tool, id, "Content created");
        Ok(response)
    }

    pub async fn create_news_item(&self, params: CreateNewsItemParams) -> ToolResult<ResponseEnvelope> {
        const TOOL: &str = "create_news_item";
        let title = required(TOOL, "title", &params.title)?;
        let mut body = base_body(&title, None);
        body.insert("Content".into(), json!(params.content));
        body.insert("Summary".into(), json!(params.summary.unwrap_or_default()));
        if let Some(author) = params.author {
            body.insert("Author".into(), json!(author));
        }
        self.create(TOOL, EntitySet::NewsItems, params.draft, body).await
    }

    pub async fn create_blog_post(&self, params: CreateBlogPostParams) -> ToolResult<ResponseEnvelope> {
        const TOOL: &str = "create_blog_post";
        let title = required(TOOL, "title", &params.title)?;
        let parent = parent_id(TOOL, &params.parent_id)?;
        let mut body = base_body(&title, Some(&parent));
        body.insert("Content".into(), json!(params.content));
        body.insert("Summary".into(), json!(params.summary.unwrap_or_default()));
        body.insert("AllowComments".into(), json!(params.allow_comments));
        body.insert("IncludeInSitemap".into(), json!(true));
        self.create(TOOL, EntitySet::BlogPosts, params.draft, body).await
    }

    pub async fn create_list_item(&self, params: CreateListItemParams) -> ToolResult<ResponseEnvelope> {
        const TOOL: &str = "create_list_item";
        let title = required(TOOL, "title", &params.title)?;
        let parent = parent_id(TOOL, &params.parent_id)?;
        let mut body = base_body(&title, Some(&parent));
        body.insert("Content".into(), json!(params.content));
        self.create(TOOL, EntitySet::ListItems, params.draft, body).await
    }

    pub async fn create_event(&self, params: CreateEventParams) -> ToolResult<ResponseEnvelope> {
        const TOOL: &str = "create_event";
        let title = required(TOOL, "title", &params.title)?;
        let parent = parent_id(TOOL, &params.parent_id)?;
        let start = event_time(TOOL, "event_start", &params.event_start)?;
        let end = event_time(TOOL, "event_end", &params.event_end)?;
        if end < start {
            return Err(ToolError::invalid(
                TOOL,
                "'event_end' is before 'event_start'",
            ));
        }

        let mut body = base_body(&title, Some(&parent));
        body.insert("Summary".into(), json!(params.summary));
        body.insert("Content".into(), json!(params.content));
        body.insert("EventStart".into(), json!(timestamp(start)));
        body.insert("EventEnd".into(), json!(timestamp(end)));
        self.create(TOOL, EntitySet::Events, params.draft, body).await
    }

    pub async fn create_image(&self, params: CreateImageParams) -> ToolResult<ResponseEnvelope> {
        const TOOL: &str = "create_image";
        let title = required(TOOL, "title", &params.title)?;
        let parent = parent_id(TOOL, &params.parent_id)?;
        let mut body = base_body(&title, Some(&parent));
        body.insert(
            "AlternativeText".into(),
            json!(params.alternative_text.unwrap_or_else(|| title.clone())),
        );
        self.create(TOOL, EntitySet::Images, params.draft, body).await
    }

    pub async fn create_document(&self, params: CreateDocumentParams) -> ToolResult<ResponseEnvelope> {
        const TOOL: &str = "create_document";
        let title = required(TOOL, "title", &params.title)?;
        let parent = parent_id(TOOL, &params.parent_id)?;
        let mut body = base_body(&title, Some(&parent));
        body.insert("Content".into(), json!(params.content));
        body.insert("Summary".into(), json!(params.summary.unwrap_or_default()));
        body.insert("IncludeInSitemap".into(), json!(true));
        self.create(TOOL, EntitySet::Documents, params.draft, body).await
    }

    pub async fn create_video(&self, params: CreateVideoParams) -> ToolResult<ResponseEnvelope> {
        const TOOL: &str = "create_video";
        let title = required(TOOL, "title", &params.title)?;
        let parent = parent_id(TOOL, &params.parent_id)?;
        let mut body = base_body(&title, Some(&parent));
        body.insert("Content".into(), json!(params.content));
        self.create(TOOL, EntitySet::Videos, params.draft, body).await
    }
}

/// Fields every create sends: title, generated URL name, publication date
/// and the parent when the content type has one.
fn base_body(title: &str, parent: Option<&str>) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("Title".into(), json!(title));
    body.insert("UrlName".into(), json!(url_name(title)));
    body.insert("PublicationDate".into(), json!(timestamp(Utc::now())));
    if let Some(parent) = parent {
        body.insert("ParentId".into(), json!(parent));
    }
    body
}
