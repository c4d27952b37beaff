//! MCP server.
//!
//! One handler exposes every Sitefinity tool. The tool methods live in
//! [`super::tools`], grouped into one router per concern and combined here.

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};

use crate::sitefinity::SitefinityTools;

const INSTRUCTIONS: &str = "Sitefinity CMS tools. Read tools (get_*) return one text block per \
item and accept optional top/skip paging. Parent lookups (get_parent_blogs, get_parent_lists, \
get_calendars, get_albums, get_document_libraries, get_video_libraries) return an id to title \
map; use those ids as parent_id for the create_* tools. Creates default to drafts.";

#[derive(Clone)]
pub struct McpServer {
    pub(crate) tools: SitefinityTools,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(tools: SitefinityTools) -> Self {
        Self {
            tools,
            tool_router: Self::combined_router(),
        }
    }

    fn combined_router() -> ToolRouter<Self> {
        Self::content_router() + Self::authoring_router()
    }

    /// Name, description and input schema of every tool, without needing
    /// a server instance.
    pub fn tool_catalog() -> Vec<Tool> {
        let mut tools = Self::combined_router().list_all();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_instructions(INSTRUCTIONS)
    }
}
