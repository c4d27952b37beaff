//! Server commands: MCP over stdio, MCP over Streamable HTTP, REST.

use std::net::IpAddr;

use miette::Result;

use crate::api;
use crate::mcp::{self, run_stdio};
use crate::sitefinity::SitefinityTools;

pub async fn stdio(tools: SitefinityTools) -> Result<()> {
    run_stdio(tools).await?;
    Ok(())
}

pub async fn mcp_http(tools: SitefinityTools, host: IpAddr, port: u16) -> Result<()> {
    println!();
    println!("TahubuSF MCP server starting...");
    println!("   MCP:    http://{}:{}/mcp", host, port);
    println!("   Health: http://{}:{}/health", host, port);
    println!("   CMS:    {}", tools.client().site_url());
    println!();

    mcp::http::run(tools, mcp::http::Config { host, port }).await?;
    Ok(())
}

pub async fn api(tools: SitefinityTools, host: IpAddr, port: u16) -> Result<()> {
    println!();
    println!("TahubuSF API server starting...");
    println!("   API:  http://{}:{}/api/list-tools", host, port);
    println!("   Docs: http://{}:{}/docs", host, port);
    println!("   CMS:  {}", tools.client().site_url());
    println!();

    api::run(tools, api::Config { host, port }).await?;
    Ok(())
}
