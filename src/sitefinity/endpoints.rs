//! CMS endpoint URLs.

use std::fmt;

/// OData entity sets the tools read from or write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntitySet {
    NewsItems,
    Blogs,
    BlogPosts,
    Pages,
    Templates,
    Sites,
    Lists,
    ListItems,
    Calendars,
    Events,
    ContentItems,
    Albums,
    Images,
    DocumentLibraries,
    Documents,
    VideoLibraries,
    Videos,
    SearchIndexes,
    Taxonomies,
    SectionPresets,
    Forms,
}

impl EntitySet {
    /// URL segment of the entity set.
    pub fn path(&self) -> &'static str {
        match self {
            EntitySet::NewsItems => "newsitems",
            EntitySet::Blogs => "blogs",
            EntitySet::BlogPosts => "blogposts",
            EntitySet::Pages => "pages",
            EntitySet::Templates => "templates",
            EntitySet::Sites => "sites",
            EntitySet::Lists => "lists",
            EntitySet::ListItems => "listitems",
            EntitySet::Calendars => "calendars",
            EntitySet::Events => "eventsitems",
            EntitySet::ContentItems => "contentitems",
            EntitySet::Albums => "albums",
            EntitySet::Images => "images",
            EntitySet::DocumentLibraries => "documentlibraries",
            EntitySet::Documents => "documents",
            EntitySet::VideoLibraries => "videolibraries",
            EntitySet::Videos => "videos",
            EntitySet::SearchIndexes => "searchindexes",
            EntitySet::Taxonomies => "taxonomies",
            EntitySet::SectionPresets => "sectionpresets",
            EntitySet::Forms => "forms",
        }
    }

    /// Plural, human readable name used in tool output.
    pub fn label(&self) -> &'static str {
        match self {
            EntitySet::NewsItems => "news items",
            EntitySet::Blogs => "blogs",
            EntitySet::BlogPosts => "blog posts",
            EntitySet::Pages => "pages",
            EntitySet::Templates => "page templates",
            EntitySet::Sites => "sites",
            EntitySet::Lists => "lists",
            EntitySet::ListItems => "list items",
            EntitySet::Calendars => "calendars",
            EntitySet::Events => "events",
            EntitySet::ContentItems => "shared content items",
            EntitySet::Albums => "albums",
            EntitySet::Images => "images",
            EntitySet::DocumentLibraries => "document libraries",
            EntitySet::Documents => "documents",
            EntitySet::VideoLibraries => "video libraries",
            EntitySet::Videos => "videos",
            EntitySet::SearchIndexes => "search indexes",
            EntitySet::Taxonomies => "taxonomies",
            EntitySet::SectionPresets => "section presets",
            EntitySet::Forms => "forms",
        }
    }
}

impl fmt::Display for EntitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Published content is read and written through the content API; drafts
/// are created through the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Content,
    Management,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    content: String,
    management: String,
}

impl Endpoints {
    pub fn new(site_url: &str) -> Self {
        let base = site_url.trim_end_matches('/');
        Self {
            content: format!("{}/api/default", base),
            management: format!("{}/sf/system", base),
        }
    }

    pub fn content_root(&self) -> &str {
        &self.content
    }

    pub fn management_root(&self) -> &str {
        &self.management
    }

    pub fn collection(&self, area: Area, set: EntitySet) -> String {
        let root = match area {
            Area::Content => &self.content,
            Area::Management => &self.management,
        };
        format!("{}/{}", root, set.path())
    }

    /// URL of a single item, `{content}/{set}({id})`.
    ///
    /// Returns `None` unless `id` looks like a GUID (hex digits and
    /// hyphens), so arbitrary input never reaches the URL.
    pub fn item(&self, set: EntitySet, id: &str) -> Option<String> {
        is_guid_like(id).then(|| format!("{}({})", self.collection(Area::Content, set), id))
    }
}

pub fn is_guid_like(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}
