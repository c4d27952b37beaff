pub mod call;
pub mod serve;
pub mod tools;

use miette::Result;

use crate::config::Settings;
use crate::sitefinity::SitefinityTools;

/// Build the tool set from the environment (and `.env`), with `--site-url`
/// taking precedence over `SITEFINITY_SITE_PREFIX`.
pub fn load_tools(site_url: Option<String>) -> Result<SitefinityTools> {
    let settings = Settings::load(site_url)?;
    tracing::debug!(
        site_url = %settings.site_url,
        auth = settings.auth.mode(),
        "Loaded settings"
    );
    Ok(SitefinityTools::from_settings(&settings)?)
}


#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;
