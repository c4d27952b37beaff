//! `tsf call`: invoke a tool in-process, straight against the CMS.

use miette::Result;

use crate::cli::utils::{parse_params, render_result};
use crate::sitefinity::SitefinityTools;

pub async fn call_tool(tools: &SitefinityTools, name: &str, params: Option<&str>) -> Result<String> {
    let params = parse_params(params)?;
    let output = tools.invoke(name, params).await?;
    Ok(render_result(&output.into_json())?)
}
