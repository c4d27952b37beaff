//! Parent lookups and create tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    tool, tool_router,
};

use super::respond;
use crate::mcp::McpServer;
use crate::sitefinity::{
    CreateBlogPostParams, CreateDocumentParams, CreateEventParams, CreateImageParams,
    CreateListItemParams, CreateNewsItemParams, CreateVideoParams, ToolOutput,
};

#[tool_router(router = authoring_router, vis = "pub(crate)")]
impl McpServer {
    #[tool(description = "List blogs that can hold new posts, as an ID to title map")]
    pub async fn get_parent_blogs(&self) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_parent_blogs().await.map(ToolOutput::Lookup))
    }

    #[tool(description = "List lists that can hold new list items, as an ID to title map")]
    pub async fn get_parent_lists(&self) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_parent_lists().await.map(ToolOutput::Lookup))
    }

    #[tool(description = "List calendars that can hold new events, as an ID to title map")]
    pub async fn get_calendars(&self) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_calendars().await.map(ToolOutput::Lookup))
    }

    #[tool(description = "List albums that can hold new images, as an ID to title map")]
    pub async fn get_albums(&self) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_albums().await.map(ToolOutput::Lookup))
    }

    #[tool(description = "List document libraries that can hold new documents, as an ID to title map")]
    pub async fn get_document_libraries(&self) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_document_libraries().await.map(ToolOutput::Lookup))
    }

    #[tool(description = "List video libraries that can hold new videos, as an ID to title map")]
    pub async fn get_video_libraries(&self) -> Result<CallToolResult, McpError> {
        respond(self.tools.get_video_libraries().await.map(ToolOutput::Lookup))
    }

    #[tool(description = "Create a news item. Drafts (the default) go through the management API")]
    pub async fn create_news_item(
        &self,
        params: Parameters<CreateNewsItemParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.create_news_item(params.0).await.map(ToolOutput::Record))
    }

    #[tool(description = "Create a blog post in the blog given by parent_id (see get_parent_blogs)")]
    pub async fn create_blog_post(
        &self,
        params: Parameters<CreateBlogPostParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.create_blog_post(params.0).await.map(ToolOutput::Record))
    }

    #[tool(description = "Create a list item in the list given by parent_id (see get_parent_lists)")]
    pub async fn create_list_item(
        &self,
        params: Parameters<CreateListItemParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.create_list_item(params.0).await.map(ToolOutput::Record))
    }

    #[tool(description = "Create an event in the calendar given by parent_id (see get_calendars)")]
    pub async fn create_event(
        &self,
        params: Parameters<CreateEventParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.create_event(params.0).await.map(ToolOutput::Record))
    }

    #[tool(description = "Create an image record in the album given by parent_id (see get_albums)")]
    pub async fn create_image(
        &self,
        params: Parameters<CreateImageParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.create_image(params.0).await.map(ToolOutput::Record))
    }

    #[tool(description = "Create a document record in the library given by parent_id (see get_document_libraries)")]
    pub async fn create_document(
        &self,
        params: Parameters<CreateDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.create_document(params.0).await.map(ToolOutput::Record))
    }

    #[tool(description = "Create a video record in the library given by parent_id (see get_video_libraries)")]
    pub async fn create_video(
        &self,
        params: Parameters<CreateVideoParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.tools.create_video(params.0).await.map(ToolOutput::Record))
    }
}
