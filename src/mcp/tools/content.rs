//! Read tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    tool, tool_router,
};

use super::respond;
use crate::mcp::McpServer;
use crate::sitefinity::{BlogPostIdParams, ListParams, ToolOutput};

#[tool_router(router = content_router, vis = "pub(crate)")]
impl McpServer {
    #[tool(description = "Get news items and press releases: title, summary, author and publication date")]
    pub async fn get_news(&self, params: Parameters<ListParams>) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_news(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get blog posts: title, summary and publication date")]
    pub async fn get_blog_posts(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_blog_posts(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get a single blog post by ID, including its full content and URL name")]
    pub async fn get_blog_post_by_id(
        &self,
        params: Parameters<BlogPostIdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            self.tools
                .get_blog_post_by_id(&params.0.post_id)
                .await
                .map(ToolOutput::Text),
        )
    }

    #[tool(description = "Get pages: title, URL name, home page flag and publication date")]
    pub async fn get_pages(&self, params: Parameters<ListParams>) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_pages(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get page templates: title, framework and renderer")]
    pub async fn get_page_templates(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_page_templates(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get sites: name, live URL and offline flag")]
    pub async fn get_sites(&self, params: Parameters<ListParams>) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_sites(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get list items: title, content and publication date")]
    pub async fn get_list_items(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_list_items(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get events: title, summary, content, start and end")]
    pub async fn get_events(&self, params: Parameters<ListParams>) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_events(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get shared content blocks: title, content and publication date")]
    pub async fn get_shared_content(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_shared_content(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get images: title, embed URL, dimensions, size and alternative text")]
    pub async fn get_images(&self, params: Parameters<ListParams>) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_images(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get documents: title, extension, URL and publication date")]
    pub async fn get_documents(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_documents(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get videos: title, URL and publication date")]
    pub async fn get_videos(&self, params: Parameters<ListParams>) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_videos(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get search indexes: name, active flag and backend flag")]
    pub async fn get_search_indexes(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_search_indexes(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get taxonomies: title, taxon name, type and sharing")]
    pub async fn get_taxonomies(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_taxonomies(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get section presets: title and thumbnail")]
    pub async fn get_section_presets(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_section_presets(&params.0).await.map(ToolOutput::Text))
    }

    #[tool(description = "Get forms: title, success message and renderer")]
    pub async fn get_forms(&self, params: Parameters<ListParams>) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_forms(&params.0).await.map(ToolOutput::Text))
    }
}
