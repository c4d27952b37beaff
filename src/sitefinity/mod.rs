//! Sitefinity tools.
//!
//! Each tool is one call through the request pipeline plus a little
//! reshaping: read tools render text blocks, parent lookups return an
//! id to title map and create tools return the CMS response.

mod authoring;
mod content;
mod dispatch;
mod endpoints;
mod error;
mod format;
mod params;
mod slug;


pub use dispatch::{TOOL_NAMES, ToolOutput};
pub use endpoints::{Area, Endpoints, EntitySet, is_guid_like};
pub use error::{ToolError, ToolResult};
pub use format::{Field, id_title_map, render_collection, render_item};
pub use params::{
    BlogPostIdParams, CreateBlogPostParams, CreateDocumentParams, CreateEventParams,
    CreateImageParams, CreateListItemParams, CreateNewsItemParams, CreateVideoParams, ListParams,
};
pub use slug::url_name;

use crate::config::{ConfigResult, Settings};
use crate::http::SitefinityClient;

/// Entry point for every tool, shared by all transports.
#[derive(Debug, Clone)]
pub struct SitefinityTools {
    client: SitefinityClient,
    endpoints: Endpoints,
}

impl SitefinityTools {
    pub fn new(client: SitefinityClient) -> Self {
        let endpoints = Endpoints::new(client.site_url());
        Self { client, endpoints }
    }

    pub fn from_settings(settings: &Settings) -> ConfigResult<Self> {
        Ok(Self::new(SitefinityClient::from_settings(settings)?))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn client(&self) -> &SitefinityClient {
        &self.client
    }
}
