//! Application state for the API server.

use crate::sitefinity::SitefinityTools;

/// Shared application state.
///
/// The tool set is cheap to clone; every clone shares one HTTP client and
/// one token cache.
#[derive(Clone)]
pub struct AppState {
    tools: SitefinityTools,
}

impl AppState {
    pub fn new(tools: SitefinityTools) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &SitefinityTools {
        &self.tools
    }
}
