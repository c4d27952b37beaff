//! Read tools. Each renders one text block per item.

use tracing::debug;

use super::SitefinityTools;
use super::endpoints::{Area, EntitySet};
use super::error::{ToolError, ToolResult};
use super::format::{Field, field, render_collection, render_item};
use super::params::{ListParams, required};

const NEWS: &[Field] = &[
    field("Title", "Title"),
    field("Summary", "Summary"),
    field("Author", "Author"),
    field("PublicationDate", "Publication Date"),
];

const BLOG_POSTS: &[Field] = &[
    field("Title", "Title"),
    field("Summary", "Summary"),
    field("PublicationDate", "Publication Date"),
];

const BLOG_POST_DETAIL: &[Field] = &[
    field("Title", "Title"),
    field("Summary", "Summary"),
    field("Content", "Content"),
    field("PublicationDate", "Publication Date"),
    field("UrlName", "URL Name"),
];

const PAGES: &[Field] = &[
    field("Title", "Title"),
    field("UrlName", "URL Name"),
    field("IsHomePage", "Is Home Page"),
    field("PublicationDate", "Publication Date"),
];

const TEMPLATES: &[Field] = &[
    field("Title", "Title"),
    field("Framework", "Framework"),
    field("Renderer", "Renderer"),
];

const SITES: &[Field] = &[
    field("Name", "Name"),
    field("LiveUrl", "Live URL"),
    field("IsOffline", "Is Offline"),
];

const LIST_ITEMS: &[Field] = &[
    field("Title", "Title"),
    field("Content", "Content"),
    field("PublicationDate", "Publication Date"),
];

const EVENTS: &[Field] = &[
    field("Title", "Title"),
    field("Summary", "Summary"),
    field("Content", "Content"),
    field("EventStart", "Event Start"),
    field("EventEnd", "Event End"),
];

const SHARED_CONTENT: &[Field] = &[
    field("Title", "Title"),
    field("Content", "Content"),
    field("PublicationDate", "Publication Date"),
];

const IMAGES: &[Field] = &[
    field("Title", "Title"),
    field("EmbedUrl", "Embed URL"),
    field("PublicationDate", "Publication Date"),
    field("Extension", "Extension"),
    field("TotalSize", "Total Size"),
    field("Width", "Width"),
    field("Height", "Height"),
    field("AlternativeText", "Alternative Text"),
];

const DOCUMENTS: &[Field] = &[
    field("Title", "Title"),
    field("Extension", "Extension"),
    field("Url", "URL"),
    field("PublicationDate", "Publication Date"),
];

const VIDEOS: &[Field] = &[
    field("Title", "Title"),
    field("Url", "URL"),
    field("PublicationDate", "Publication Date"),
];

const SEARCH_INDEXES: &[Field] = &[
    field("Name", "Name"),
    field("IsActive", "Is Active"),
    field("IsBackend", "Is Backend"),
];

const TAXONOMIES: &[Field] = &[
    field("Title", "Title"),
    field("TaxonName", "Taxon Name"),
    field("Type", "Type"),
    field("TaxonomySharedWith", "Shared With"),
];

const SECTION_PRESETS: &[Field] = &[field("Title", "Title"), field("Thumbnail", "Thumbnail")];

const FORMS: &[Field] = &[
    field("Title", "Title"),
    field("SuccessMessage", "Success Message"),
    field("Renderer", "Renderer"),
];

impl SitefinityTools {
    async fn list(&self, set: EntitySet, fields: &[Field], params: &ListParams) -> ToolResult<String> {
        let url = self.endpoints.collection(Area::Content, set);
        debug!(url = %url, top = ?params.top, skip = ?params.skip, "Listing {}", set.label());
        let body = self.client.get(&url, &params.query()).await?;
        render_collection(set, fields, &body)
    }

    pub async fn get_news(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::NewsItems, NEWS, params).await
    }

    pub async fn get_blog_posts(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::BlogPosts, BLOG_POSTS, params).await
    }

    pub async fn get_blog_post_by_id(&self, post_id: &str) -> ToolResult<String> {
        const TOOL: &str = "get_blog_post_by_id";
        let post_id = required(TOOL, "post_id", post_id)?;
        let url = self
            .endpoints
            .item(EntitySet::BlogPosts, &post_id)
            .ok_or_else(|| {
                ToolError::invalid(TOOL, format!("'post_id' must be a GUID, got '{}'", post_id))
            })?;
        let body = self.client.get(&url, &[]).await?;
        Ok(render_item(BLOG_POST_DETAIL, &body))
    }

    pub async fn get_pages(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Pages, PAGES, params).await
    }

    pub async fn get_page_templates(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Templates, TEMPLATES, params).await
    }

    pub async fn get_sites(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Sites, SITES, params).await
    }

    pub async fn get_list_items(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::ListItems, LIST_ITEMS, params).await
    }

    pub async fn get_events(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Events, EVENTS, params).await
    }

    pub async fn get_shared_content(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::ContentItems, SHARED_CONTENT, params).await
    }

    pub async fn get_images(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Images, IMAGES, params).await
    }

    pub async fn get_documents(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Documents, DOCUMENTS, params).await
    }

    pub async fn get_videos(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Videos, VIDEOS, params).await
    }

    pub async fn get_search_indexes(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::SearchIndexes, SEARCH_INDEXES, params).await
    }

    pub async fn get_taxonomies(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Taxonomies, TAXONOMIES, params).await
    }

    pub async fn get_section_presets(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::SectionPresets, SECTION_PRESETS, params).await
    }

    pub async fn get_forms(&self, params: &ListParams) -> ToolResult<String> {
        self.list(EntitySet::Forms, FORMS, params).await
    }
}
